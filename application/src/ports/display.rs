//! Display port
//!
//! Defines the signals the dispatcher publishes to whatever renders the
//! record list. The display never mutates the data model; it receives a
//! read-only view of the records with every list change.

use podlens_domain::Record;
use tokio::sync::mpsc;

/// Callback for display updates
///
/// Implementations live in the presentation layer (console, TUI, ...).
/// The dispatcher calls these from its control task only.
pub trait DisplayNotifier: Send + Sync {
    /// The record list changed; `records` is its current content
    fn on_list_changed(&self, records: &[Record]);

    /// A request started (`true`) or finished (`false`)
    fn on_busy_changed(&self, busy: bool);

    /// The input itself was bad (shown next to the input field)
    fn on_field_error(&self, message: &str);

    /// Something went wrong (shown as a dismissible notification)
    fn on_notify(&self, message: &str);
}

/// No-op display for when nothing needs rendering
pub struct NoDisplay;

impl DisplayNotifier for NoDisplay {
    fn on_list_changed(&self, _records: &[Record]) {}
    fn on_busy_changed(&self, _busy: bool) {}
    fn on_field_error(&self, _message: &str) {}
    fn on_notify(&self, _message: &str) {}
}

/// Display signal as a value, for forwarding across tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    ListChanged(Vec<Record>),
    BusyChanged(bool),
    FieldError(String),
    Notify(String),
}

impl DisplayEvent {
    /// Replay this signal on a concrete display
    pub fn deliver(&self, display: &dyn DisplayNotifier) {
        match self {
            Self::ListChanged(records) => display.on_list_changed(records),
            Self::BusyChanged(busy) => display.on_busy_changed(*busy),
            Self::FieldError(message) => display.on_field_error(message),
            Self::Notify(message) => display.on_notify(message),
        }
    }
}

/// Adapter: [`DisplayNotifier`] → `mpsc` channel of [`DisplayEvent`]
///
/// Lets a renderer running on another task consume display signals in the
/// order the dispatcher issued them.
pub struct ChannelDisplay {
    tx: mpsc::UnboundedSender<DisplayEvent>,
}

impl ChannelDisplay {
    pub fn new(tx: mpsc::UnboundedSender<DisplayEvent>) -> Self {
        Self { tx }
    }

    /// Create the adapter together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DisplayEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: DisplayEvent) {
        // Renderer gone; nothing left to show
        let _ = self.tx.send(event);
    }
}

impl DisplayNotifier for ChannelDisplay {
    fn on_list_changed(&self, records: &[Record]) {
        self.send(DisplayEvent::ListChanged(records.to_vec()));
    }

    fn on_busy_changed(&self, busy: bool) {
        self.send(DisplayEvent::BusyChanged(busy));
    }

    fn on_field_error(&self, message: &str) {
        self.send(DisplayEvent::FieldError(message.to_string()));
    }

    fn on_notify(&self, message: &str) {
        self.send(DisplayEvent::Notify(message.to_string()));
    }
}
