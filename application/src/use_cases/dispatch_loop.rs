//! Dispatcher control task (Actor pattern)
//!
//! Owns the [`QueryDispatcher`] and processes commands from the input
//! surface together with completions posted back by background calls.
//! Everything the display sees is issued from this one task.

use super::dispatch_query::QueryDispatcher;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Commands sent from the input surface to the control task (Actor inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchCommand {
    /// The user finished typing; submit the text as-is
    Submit(String),
    /// Empty the record list
    Clear,
    /// Graceful shutdown
    Shutdown,
}

/// Run the dispatcher until shutdown, then hand it back.
///
/// Completions are drained before new commands so a finished call is
/// published before the next submission clears the list.
pub async fn dispatcher_task(
    mut dispatcher: QueryDispatcher,
    mut commands: mpsc::UnboundedReceiver<DispatchCommand>,
    shutdown: CancellationToken,
) -> QueryDispatcher {
    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                debug!("Dispatcher shutdown requested");
                break;
            }

            Some(completion) = dispatcher.next_completion() => {
                dispatcher.complete(completion);
            }

            cmd = commands.recv() => {
                match cmd {
                    Some(DispatchCommand::Submit(text)) => {
                        if let Err(e) = dispatcher.submit(text) {
                            debug!("Submission refused: {}", e);
                        }
                    }
                    Some(DispatchCommand::Clear) => dispatcher.clear(),
                    // Inbox closed or explicit quit
                    Some(DispatchCommand::Shutdown) | None => break,
                }
            }
        }
    }

    dispatcher
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_service::TransportError;
    use crate::ports::display::{ChannelDisplay, DisplayEvent};
    use crate::config::QueryParams;
    use crate::use_cases::dispatch_query::tests::{ScriptedService, result_answer};
    use podlens_domain::{OverlapPolicy, RawAnswer, Record, RequestState, TerminalOutcome};
    use std::sync::Arc;
    use std::time::Duration;

    type TaskParts = (
        mpsc::UnboundedSender<DispatchCommand>,
        mpsc::UnboundedReceiver<DisplayEvent>,
        CancellationToken,
        tokio::task::JoinHandle<QueryDispatcher>,
    );

    fn spawn_task(service: ScriptedService) -> TaskParts {
        spawn_task_with(Arc::new(service), QueryParams::default())
    }

    fn spawn_task_with(service: Arc<ScriptedService>, params: QueryParams) -> TaskParts {
        let (display, events) = ChannelDisplay::channel();
        let dispatcher = QueryDispatcher::new(service, Arc::new(display)).with_params(params);
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(dispatcher_task(dispatcher, cmd_rx, shutdown.clone()));
        (cmd_tx, events, shutdown, handle)
    }

    fn slow_and_fast() -> Arc<ScriptedService> {
        Arc::new(
            ScriptedService::new()
                .answer("slow", result_answer("1"))
                .delay("slow", Duration::from_secs(10))
                .answer("fast", result_answer("2")),
        )
    }

    /// Collect display events until `busy` goes back to false.
    async fn events_until_idle(events: &mut mpsc::UnboundedReceiver<DisplayEvent>) -> Vec<DisplayEvent> {
        let mut seen = Vec::new();
        while let Some(event) = events.recv().await {
            let done = event == DisplayEvent::BusyChanged(false);
            seen.push(event);
            if done {
                break;
            }
        }
        seen
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_task() {
        let service = ScriptedService::new().answer("2+2", result_answer("4"));
        let (cmd_tx, mut events, _shutdown, handle) = spawn_task(service);

        cmd_tx.send(DispatchCommand::Submit("2+2".to_string())).unwrap();
        let seen = events_until_idle(&mut events).await;
        assert_eq!(
            seen,
            vec![
                DisplayEvent::ListChanged(vec![]),
                DisplayEvent::BusyChanged(true),
                DisplayEvent::BusyChanged(false),
            ]
        );
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::ListChanged(vec![Record::new("Result", "4")]))
        );

        cmd_tx.send(DispatchCommand::Shutdown).unwrap();
        let dispatcher = handle.await.unwrap();
        assert_eq!(dispatcher.records().len(), 1);
        assert_eq!(
            dispatcher.state(),
            &RequestState::Completed(TerminalOutcome::Answered { records: 1 })
        );
    }

    #[tokio::test]
    async fn test_errors_reach_display_through_task() {
        let service = ScriptedService::new()
            .answer("", RawAnswer::error("Empty query"))
            .fail("offline", TransportError::Timeout);
        let (cmd_tx, mut events, _shutdown, handle) = spawn_task(service);

        cmd_tx.send(DispatchCommand::Submit(String::new())).unwrap();
        events_until_idle(&mut events).await;
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::Notify("Empty query".to_string()))
        );

        cmd_tx.send(DispatchCommand::Submit("offline".to_string())).unwrap();
        events_until_idle(&mut events).await;
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::Notify("Request timed out".to_string()))
        );

        drop(cmd_tx);
        let dispatcher = handle.await.unwrap();
        assert_eq!(dispatcher.state(), &RequestState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reject_policy_notifies_busy_through_task() {
        let service = slow_and_fast();
        let (cmd_tx, mut events, _shutdown, handle) =
            spawn_task_with(service.clone(), QueryParams::default());

        cmd_tx.send(DispatchCommand::Submit("slow".to_string())).unwrap();
        cmd_tx.send(DispatchCommand::Submit("fast".to_string())).unwrap();

        assert_eq!(events.recv().await, Some(DisplayEvent::ListChanged(vec![])));
        assert_eq!(events.recv().await, Some(DisplayEvent::BusyChanged(true)));
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::Notify("A query is already in progress".to_string()))
        );

        events_until_idle(&mut events).await;
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::ListChanged(vec![Record::new("Result", "1")]))
        );

        cmd_tx.send(DispatchCommand::Shutdown).unwrap();
        handle.await.unwrap();
        assert_eq!(service.asked(), vec!["slow"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_allow_policy_dispatches_while_in_flight() {
        let service = slow_and_fast();
        let params = QueryParams::default().with_overlap_policy(OverlapPolicy::Allow);
        let (cmd_tx, mut events, _shutdown, handle) = spawn_task_with(service.clone(), params);

        cmd_tx.send(DispatchCommand::Submit("slow".to_string())).unwrap();
        cmd_tx.send(DispatchCommand::Submit("fast".to_string())).unwrap();

        // Both submissions are dispatched before either answer lands
        let mut seen = Vec::new();
        while seen.len() < 4 {
            seen.push(events.recv().await.unwrap());
        }
        assert_eq!(
            seen,
            vec![
                DisplayEvent::ListChanged(vec![]),
                DisplayEvent::BusyChanged(true),
                DisplayEvent::ListChanged(vec![]),
                DisplayEvent::BusyChanged(true),
            ]
        );

        // The fast answer lands first, the slow one is prepended later
        events_until_idle(&mut events).await;
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::ListChanged(vec![Record::new("Result", "2")]))
        );
        events_until_idle(&mut events).await;
        assert_eq!(
            events.recv().await,
            Some(DisplayEvent::ListChanged(vec![
                Record::new("Result", "1"),
                Record::new("Result", "2"),
            ]))
        );

        cmd_tx.send(DispatchCommand::Shutdown).unwrap();
        let dispatcher = handle.await.unwrap();
        assert_eq!(service.asked(), vec!["slow", "fast"]);
        assert_eq!(
            dispatcher.state(),
            &RequestState::Completed(TerminalOutcome::Answered { records: 1 })
        );
    }

    #[tokio::test]
    async fn test_clear_command() {
        let service = ScriptedService::new().answer("2+2", result_answer("4"));
        let (cmd_tx, mut events, shutdown, handle) = spawn_task(service);

        cmd_tx.send(DispatchCommand::Submit("2+2".to_string())).unwrap();
        events_until_idle(&mut events).await;
        events.recv().await;

        cmd_tx.send(DispatchCommand::Clear).unwrap();
        assert_eq!(events.recv().await, Some(DisplayEvent::ListChanged(vec![])));

        shutdown.cancel();
        let dispatcher = handle.await.unwrap();
        assert!(dispatcher.records().is_empty());
    }
}
