//! Interactive chat module
//!
//! Provides a readline-based prompt that sends each line as a question to
//! a dispatcher running on its own control task.

mod repl;
mod session;

pub use repl::ChatRepl;
pub use session::{render_events, run_chat};
