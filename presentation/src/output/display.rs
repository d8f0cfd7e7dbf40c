//! Console implementation of the display port

use super::console::ConsoleFormatter;
use crate::progress::spinner::BusySpinner;
use colored::Colorize;
use podlens_application::DisplayNotifier;
use podlens_domain::{OutputFormat, Record};
use std::sync::atomic::{AtomicBool, Ordering};

/// Renders dispatcher callbacks on the terminal.
///
/// Records go to stdout; the spinner, field errors and notices go to stderr
/// so `-o json` output stays machine-readable.
pub struct ConsoleDisplay {
    format: OutputFormat,
    spinner: Option<BusySpinner>,
    /// Set when a call finished and its result has not been shown yet
    settling: AtomicBool,
}

impl ConsoleDisplay {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            spinner: Some(BusySpinner::new()),
            settling: AtomicBool::new(false),
        }
    }

    /// Set whether to show the busy spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.spinner = show.then(BusySpinner::new);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// What an answered list renders to; `None` prints nothing
    pub fn list_output(&self, records: &[Record], answered: bool) -> Option<String> {
        match (records.is_empty(), answered, self.format) {
            (false, _, format) => Some(ConsoleFormatter::format(records, format)),
            (true, true, OutputFormat::Text) => Some("(no pods)".dimmed().to_string()),
            (true, true, OutputFormat::Json) => Some(ConsoleFormatter::format_json(records)),
            // Emptied lists are implied by the next answer
            (true, false, _) => None,
        }
    }

    /// Text shown for a field error
    pub fn field_error_line(message: &str) -> String {
        format!("{} {}", "✗".red().bold(), message.red())
    }

    /// Text shown for a transient notice
    pub fn notice_line(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message.bold())
    }
}

impl DisplayNotifier for ConsoleDisplay {
    fn on_list_changed(&self, records: &[Record]) {
        let answered = self.settling.swap(false, Ordering::SeqCst);
        if let Some(output) = self.list_output(records, answered) {
            println!("{}", output);
        }
    }

    fn on_busy_changed(&self, busy: bool) {
        if !busy {
            self.settling.store(true, Ordering::SeqCst);
        }
        if let Some(spinner) = &self.spinner {
            if busy {
                spinner.start();
            } else {
                spinner.stop();
            }
        }
    }

    fn on_field_error(&self, message: &str) {
        self.settling.store(false, Ordering::SeqCst);
        eprintln!("{}", Self::field_error_line(message));
    }

    fn on_notify(&self, message: &str) {
        self.settling.store(false, Ordering::SeqCst);
        eprintln!("{}", Self::notice_line(message));
    }
}
