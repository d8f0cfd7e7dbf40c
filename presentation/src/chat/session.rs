//! Interactive session wiring
//!
//! The prompt, the dispatcher control task and the renderer each run on
//! their own task and talk only through channels.

use super::repl::ChatRepl;
use podlens_application::{
    AnswerService, ChannelDisplay, DisplayEvent, DisplayNotifier, QueryDispatcher, QueryParams,
    dispatcher_task,
};
use rustyline::Result as RlResult;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Replay display events on `display` until every sender is gone
pub async fn render_events<D: DisplayNotifier>(
    mut events: mpsc::UnboundedReceiver<DisplayEvent>,
    display: D,
) {
    while let Some(event) = events.recv().await {
        event.deliver(&display);
    }
}

/// Run the interactive prompt until the user quits.
///
/// The dispatcher lives on a control task fed by the prompt, and its
/// display signals are rendered on `display` by a separate task.
pub async fn run_chat<D: DisplayNotifier + 'static>(
    service: Arc<dyn AnswerService>,
    params: QueryParams,
    display: D,
    history_path: Option<PathBuf>,
) -> RlResult<()> {
    let (channel_display, events) = ChannelDisplay::channel();
    let dispatcher = QueryDispatcher::new(service, Arc::new(channel_display)).with_params(params);
    let renderer = tokio::spawn(render_events(events, display));

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();
    let control = tokio::spawn(dispatcher_task(dispatcher, cmd_rx, shutdown.clone()));

    let result = ChatRepl::new(cmd_tx)
        .with_history_path(history_path)
        .run()
        .await;

    shutdown.cancel();
    match control.await {
        // Dropping the dispatcher closes the display channel
        Ok(dispatcher) => debug!("Chat ended with {} records", dispatcher.records().len()),
        Err(e) => debug!("Dispatcher task failed: {}", e),
    }
    let _ = renderer.await;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use podlens_domain::Record;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collected {
        lines: Mutex<Vec<String>>,
    }

    /// Forwards into a shared log so the test can inspect it after the
    /// renderer consumed the display.
    struct CollectingDisplay(Arc<Collected>);

    impl DisplayNotifier for CollectingDisplay {
        fn on_list_changed(&self, records: &[Record]) {
            self.0.lines.lock().unwrap().push(format!("list:{}", records.len()));
        }
        fn on_busy_changed(&self, busy: bool) {
            self.0.lines.lock().unwrap().push(format!("busy:{}", busy));
        }
        fn on_field_error(&self, message: &str) {
            self.0.lines.lock().unwrap().push(format!("field:{}", message));
        }
        fn on_notify(&self, message: &str) {
            self.0.lines.lock().unwrap().push(format!("notify:{}", message));
        }
    }

    #[tokio::test]
    async fn test_render_events_replays_in_order_until_closed() {
        let collected = Arc::new(Collected::default());
        let (display, events) = ChannelDisplay::channel();
        let renderer = tokio::spawn(render_events(
            events,
            CollectingDisplay(collected.clone()),
        ));

        display.on_list_changed(&[]);
        display.on_busy_changed(true);
        display.on_busy_changed(false);
        display.on_list_changed(&[Record::new("Result", "4")]);
        display.on_notify("done");
        drop(display);

        renderer.await.unwrap();
        assert_eq!(
            *collected.lines.lock().unwrap(),
            vec!["list:0", "busy:true", "busy:false", "list:1", "notify:done"]
        );
    }
}
