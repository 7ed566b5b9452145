//! Timer scheduling port
//!
//! The controller never sleeps. It asks a [`Scheduler`] to deliver a
//! [`TimerEvent`] after a delay and keeps the returned [`ScheduledTask`]
//! handle so the delivery can be cancelled when the game moves on.
//!
//! Every event also carries the controller's timer epoch at scheduling
//! time. A firing that races a cancellation arrives with an old epoch and is
//! dropped by the controller.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// What a timer firing means to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// One second of countdown elapsed
    ClockTick,
    /// The first-wrong-answer window is over; retry the question
    RetryWindowElapsed,
    /// The final feedback window is over; resolve the question and advance
    ResolveWindowElapsed,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerKind::ClockTick => "clock_tick",
            TimerKind::RetryWindowElapsed => "retry_window_elapsed",
            TimerKind::ResolveWindowElapsed => "resolve_window_elapsed",
        }
    }
}

/// A timer firing delivered back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub kind: TimerKind,
    /// Controller epoch when the timer was scheduled
    pub epoch: u64,
}

impl TimerEvent {
    pub fn new(kind: TimerKind, epoch: u64) -> Self {
        Self { kind, epoch }
    }
}

/// Cancellable handle for a scheduled timer
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    token: CancellationToken,
}

impl ScheduledTask {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Stop the pending delivery. Cancelling twice is a no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token the scheduler implementation waits on
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Port for delivering [`TimerEvent`]s after a delay
///
/// Implementations live in the infrastructure layer (tokio timers) and in
/// tests (manually driven).
pub trait Scheduler: Send + Sync {
    /// Deliver `event` after `delay` unless the returned handle is cancelled
    /// first.
    fn schedule(&self, delay: Duration, event: TimerEvent) -> ScheduledTask;
}
