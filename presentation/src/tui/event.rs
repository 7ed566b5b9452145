//! TUI event types
//!
//! Commands sent TO the controller task (Actor inbox). Events coming back
//! are [`GameEvent`](quiz_application::GameEvent)s.

use quiz_application::Intent;

/// Commands sent from the TUI event loop to the controller task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// Forward a player intent to the controller
    Intent(Intent),
    /// Stop the controller task and cancel its timers
    Shutdown,
}
