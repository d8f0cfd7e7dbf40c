//! Answer service port
//!
//! Defines the interface for the external computational-knowledge service.

use async_trait::async_trait;
use podlens_domain::{Question, RawAnswer};
use thiserror::Error;

/// The call to the answer service could not complete.
///
/// Service-level failures are not transport errors: they arrive inside a
/// delivered [`RawAnswer`] through its `is_error` flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Unknown transport failure")]
    Unknown,
}

impl TransportError {
    /// Message to show the user, or `None` when the failure carries none
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Unknown => None,
            other => Some(other.to_string()),
        }
    }
}

/// Gateway to the answer service
///
/// Implementations (adapters) live in the infrastructure layer. The call is
/// the dispatcher's only suspension point and runs off the control task.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Ask one question and return the service's raw answer
    async fn query(&self, question: &Question) -> Result<RawAnswer, TransportError>;
}
