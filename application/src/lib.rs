//! Application layer for podlens
//!
//! This crate contains the query dispatcher use case, the port definitions
//! it depends on, and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{Messages, QueryParams};
pub use ports::{
    answer_service::{AnswerService, TransportError},
    display::{ChannelDisplay, DisplayEvent, DisplayNotifier, NoDisplay},
};
pub use use_cases::dispatch_loop::{DispatchCommand, dispatcher_task};
pub use use_cases::dispatch_query::{QueryCompletion, QueryDispatcher, SubmitError};
