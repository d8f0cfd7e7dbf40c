//! Presentation layer for podlens
//!
//! This crate contains CLI definitions, the console display,
//! the busy spinner, and the interactive chat prompt.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, render_events, run_chat};
pub use cli::commands::{Cli, CliOutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::display::ConsoleDisplay;
pub use progress::spinner::BusySpinner;
