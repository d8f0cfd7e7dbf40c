//! Wolfram|Alpha v2 query API adapter
//!
//! - [`client::WolframAlphaClient`]: [`AnswerService`](podlens_application::AnswerService) over HTTP
//! - [`protocol`]: JSON response shapes and their mapping to the domain answer model

pub mod client;
pub mod protocol;
