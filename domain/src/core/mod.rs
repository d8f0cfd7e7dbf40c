//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: the text submitted to the answer service
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
