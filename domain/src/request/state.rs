//! Request state machine.
//!
//! ```text
//! Idle ──submit──▶ InFlight ──answer──▶ Completed(..)
//!   ▲                 │                      │
//!   └──transport err──┘◀────────submit───────┘
//! ```

/// Identifies one dispatched call. Tickets increase monotonically.
pub type Ticket = u64;

/// Terminal outcome of one dispatched call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutcome {
    /// Records were produced (possibly zero)
    Answered { records: usize },
    /// The service reported an error
    ServiceError,
    /// The service could not interpret the question
    NotUnderstood,
    /// The call itself failed
    TransportFailure,
}

impl TerminalOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }
}

/// State of the dispatcher's request slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight { ticket: Ticket },
    Completed(TerminalOutcome),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// State after a call ends with `outcome`.
    ///
    /// A transport failure returns the slot to `Idle`; every answer the
    /// service delivered is recorded as `Completed`.
    pub fn after(outcome: TerminalOutcome) -> Self {
        match outcome {
            TerminalOutcome::TransportFailure => Self::Idle,
            other => Self::Completed(other),
        }
    }
}
