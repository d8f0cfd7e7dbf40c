//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`QueryParams`]: overlap policy, local blank check and user-facing messages

pub mod query_params;

pub use query_params::{Messages, QueryParams};
