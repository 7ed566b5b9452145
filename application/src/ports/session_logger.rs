//! Port for structured session logging.
//!
//! Defines the [`SessionLogger`] trait for recording game events (answers,
//! expiries, resolutions) to a structured transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures what happened
//! during a play-through in a machine-readable format (JSONL). Nothing is ever
//! read back.

use serde_json::Value;

/// A structured session event for logging.
pub struct SessionEvent {
    /// Event type identifier (e.g., "game_started", "answer_submitted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events.
///
/// `log` is synchronous and non-fallible; write failures are swallowed by
/// the implementation.
pub trait SessionLogger: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSessionLogger;

impl SessionLogger for NoSessionLogger {
    fn log(&self, _event: SessionEvent) {}
}
