//! Request lifecycle
//!
//! - [`state::RequestState`]: the single in-flight request's state machine
//! - [`policy::OverlapPolicy`]: what happens to a submission while busy

pub mod policy;
pub mod state;
