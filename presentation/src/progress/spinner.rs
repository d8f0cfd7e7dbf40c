//! Busy spinner shown while the answer service is working

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner toggled by the busy flag
pub struct BusySpinner {
    message: String,
    bar: Mutex<Option<ProgressBar>>,
}

impl BusySpinner {
    pub fn new() -> Self {
        Self::with_message("Asking...")
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning; a running spinner is left alone
    pub fn start(&self) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        if slot.is_some() {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(self.message.clone());
        pb.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(pb);
    }

    /// Stop and erase the spinner
    pub fn stop(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.bar.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Default for BusySpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BusySpinner {
    fn drop(&mut self) {
        self.stop();
    }
}
