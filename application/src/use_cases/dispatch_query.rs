//! Query dispatcher use case.
//!
//! Owns the record list and the request slot. A submission clears the
//! list, starts one background call to the [`AnswerService`], and later
//! applies that call's [`QueryCompletion`] on the task that owns the
//! dispatcher. The background task never touches dispatcher state; it only
//! posts its result back over a channel.

use crate::config::QueryParams;
use crate::ports::answer_service::{AnswerService, TransportError};
use crate::ports::display::DisplayNotifier;
use podlens_domain::{
    AnswerOutcome, DomainError, OverlapPolicy, Question, RawAnswer, RecordList, RequestState, TerminalOutcome,
    Ticket, flatten,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Reasons a submission is refused before anything is dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A query is already in flight (ticket {0})")]
    Busy(Ticket),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Result of one background call, posted back to the dispatcher.
#[derive(Debug)]
pub struct QueryCompletion {
    pub ticket: Ticket,
    pub result: Result<RawAnswer, TransportError>,
}

/// Use case for dispatching questions and publishing their answers
pub struct QueryDispatcher {
    service: Arc<dyn AnswerService>,
    display: Arc<dyn DisplayNotifier>,
    params: QueryParams,
    records: RecordList,
    state: RequestState,
    last_ticket: Ticket,
    /// Dispatched calls whose completion has not been applied yet
    pending: usize,
    completion_tx: mpsc::UnboundedSender<QueryCompletion>,
    completion_rx: mpsc::UnboundedReceiver<QueryCompletion>,
}

impl QueryDispatcher {
    pub fn new(service: Arc<dyn AnswerService>, display: Arc<dyn DisplayNotifier>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            service,
            display,
            params: QueryParams::default(),
            records: RecordList::new(),
            state: RequestState::Idle,
            last_ticket: 0,
            pending: 0,
            completion_tx,
            completion_rx,
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Read-only view of the accumulated records
    pub fn records(&self) -> &RecordList {
        &self.records
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Submit the current input text.
    ///
    /// Clears the record list, marks the slot in flight, signals busy and
    /// spawns the service call. Must be called from within a Tokio runtime.
    pub fn submit(&mut self, question: impl Into<Question>) -> Result<Ticket, SubmitError> {
        let mut question = question.into();

        if let RequestState::InFlight { ticket } = self.state {
            match self.params.overlap_policy {
                OverlapPolicy::Reject => {
                    warn!("Refusing submission: ticket {} still in flight", ticket);
                    self.display.on_notify(&self.params.messages.busy);
                    return Err(SubmitError::Busy(ticket));
                }
                OverlapPolicy::Allow => {
                    warn!("Dispatching over in-flight ticket {}", ticket);
                }
            }
        }

        if self.params.reject_blank {
            question = match Question::try_new(question.into_content()) {
                Ok(question) => question,
                Err(e) => {
                    debug!("Rejecting question locally: {}", e);
                    self.display
                        .on_field_error(&self.params.messages.blank_question);
                    return Err(e.into());
                }
            };
        }

        self.records.clear();
        self.display.on_list_changed(self.records.as_slice());

        self.last_ticket += 1;
        let ticket = self.last_ticket;
        self.pending += 1;
        self.state = RequestState::InFlight { ticket };
        self.display.on_busy_changed(true);

        info!("Dispatching ticket {}: {:?}", ticket, question.content());

        let service = Arc::clone(&self.service);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = service.query(&question).await;
            // Dispatcher dropped; nobody left to publish to
            let _ = tx.send(QueryCompletion { ticket, result });
        });

        Ok(ticket)
    }

    /// Wait for the next background call to finish.
    ///
    /// Pending forever while nothing is in flight, which makes it usable as
    /// a `select!` branch.
    pub async fn next_completion(&mut self) -> Option<QueryCompletion> {
        self.completion_rx.recv().await
    }

    /// Classify a finished call and publish its outcome.
    pub fn complete(&mut self, completion: QueryCompletion) -> TerminalOutcome {
        let QueryCompletion { ticket, result } = completion;
        self.pending = self.pending.saturating_sub(1);

        let outcome = match result {
            Err(err) => {
                warn!("Ticket {} transport failure: {}", ticket, err);
                self.display.on_busy_changed(false);
                let message = err
                    .user_message()
                    .unwrap_or_else(|| self.params.messages.something_went_wrong.clone());
                self.display.on_notify(&message);
                TerminalOutcome::TransportFailure
            }
            Ok(answer) => self.publish_answer(ticket, &answer),
        };

        // With overlapping calls the slot stays in flight until the last one lands
        if self.pending == 0 {
            self.state = RequestState::after(outcome.clone());
        }

        outcome
    }

    /// Wait for the in-flight call, if any, and apply it.
    pub async fn settle(&mut self) -> Option<TerminalOutcome> {
        if self.pending == 0 {
            return None;
        }
        let completion = self.next_completion().await?;
        Some(self.complete(completion))
    }

    /// Empty the record list. Does not affect an in-flight call.
    pub fn clear(&mut self) {
        debug!("Clearing {} records", self.records.len());
        self.records.clear();
        self.display.on_list_changed(self.records.as_slice());
    }

    fn publish_answer(&mut self, ticket: Ticket, answer: &RawAnswer) -> TerminalOutcome {
        match AnswerOutcome::classify(answer) {
            AnswerOutcome::ServiceError(message) => {
                warn!("Ticket {} service error: {:?}", ticket, message);
                self.display.on_busy_changed(false);
                let message = message.unwrap_or(&self.params.messages.something_went_wrong);
                self.display.on_notify(message);
                TerminalOutcome::ServiceError
            }
            AnswerOutcome::NotUnderstood => {
                info!("Ticket {}: question not understood", ticket);
                self.display.on_busy_changed(false);
                self.display
                    .on_field_error(&self.params.messages.not_understood);
                TerminalOutcome::NotUnderstood
            }
            AnswerOutcome::Success(answer) => {
                self.display.on_busy_changed(false);
                let records = flatten(answer);
                let count = records.len();
                info!(
                    "Ticket {}: {} pods, {} records",
                    ticket,
                    answer.pods.len(),
                    count
                );
                self.records.prepend_each(records);
                self.display.on_list_changed(self.records.as_slice());
                TerminalOutcome::Answered { records: count }
            }
        }
    }
}
