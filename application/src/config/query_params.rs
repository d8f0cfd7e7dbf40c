//! Query parameters: dispatcher behavior and user-facing text.
//!
//! [`QueryParams`] groups the static settings that control
//! [`QueryDispatcher`](crate::use_cases::dispatch_query::QueryDispatcher).
//! Messages are plain strings so a front end can supply translations.

use podlens_domain::OverlapPolicy;
use serde::{Deserialize, Serialize};

/// User-facing messages the dispatcher emits on its own behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Field error when the service could not interpret the question
    pub not_understood: String,
    /// Notification when a failure carries no message of its own
    pub something_went_wrong: String,
    /// Notification when a submission is refused because one is in flight
    pub busy: String,
    /// Field error when blank input is rejected locally
    pub blank_question: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            not_understood: "Sorry, I could not understand the request".to_string(),
            something_went_wrong: "Something went wrong".to_string(),
            busy: "A query is already in progress".to_string(),
            blank_question: "Please enter a question".to_string(),
        }
    }
}

/// Dispatcher control parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// What to do with a submission while a request is in flight.
    pub overlap_policy: OverlapPolicy,
    /// Reject blank questions before dispatch instead of forwarding them.
    pub reject_blank: bool,
    pub messages: Messages,
}

impl QueryParams {
    // ==================== Builder Methods ====================

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    pub fn with_reject_blank(mut self, reject: bool) -> Self {
        self.reject_blank = reject;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
