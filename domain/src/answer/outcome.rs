//! Classification of a raw answer's top-level flags.

use super::raw::RawAnswer;

/// How a delivered answer should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome<'a> {
    /// The service reported an error; carries its message when it gave one
    ServiceError(Option<&'a str>),
    /// The service could not interpret the question
    NotUnderstood,
    /// Pods are ready to be flattened
    Success(&'a RawAnswer),
}

impl<'a> AnswerOutcome<'a> {
    /// Classify an answer. `is_error` takes precedence over `is_success`.
    pub fn classify(answer: &'a RawAnswer) -> Self {
        if answer.is_error {
            Self::ServiceError(answer.error_message.as_deref())
        } else if !answer.is_success {
            Self::NotUnderstood
        } else {
            Self::Success(answer)
        }
    }
}
