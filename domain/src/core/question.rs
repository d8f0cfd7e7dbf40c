//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be sent to the answer service (Value Object)
///
/// The content is taken verbatim from the input surface. Blank content is
/// allowed: rejecting degenerate input is the service's job unless the
/// caller opts into [`Question::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a question from the raw input text, without validation
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create a question, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let question = Self::new(content);
        if question.is_blank() {
            Err(DomainError::EmptyQuestion)
        } else {
            Ok(question)
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when the content is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
