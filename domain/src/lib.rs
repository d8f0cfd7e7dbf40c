//! Domain layer for podlens
//!
//! This crate contains the answer model, the flattening rules and the
//! request state machine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer
//!
//! The answer service returns a nested structure for each question:
//! answer → pods → subpods → content elements. Only plain-text elements
//! carry displayable text.
//!
//! ## Record
//!
//! Each non-error pod is flattened into one `{title, content}` record.
//! Records accumulate newest-first in a [`RecordList`].

pub mod answer;
pub mod config;
pub mod core;
pub mod record;
pub mod request;

// Re-export commonly used types
pub use answer::{
    flatten::flatten,
    outcome::AnswerOutcome,
    raw::{ContentElement, RawAnswer, RawPod, RawSubpod},
};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{error::DomainError, question::Question};
pub use record::{Record, RecordList};
pub use request::{
    policy::OverlapPolicy,
    state::{RequestState, TerminalOutcome, Ticket},
};
