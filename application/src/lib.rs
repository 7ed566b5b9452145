//! Application layer for supermarket-quiz
//!
//! This crate contains the game controller, port definitions, and game
//! settings. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameSettings;
pub use ports::{
    cue_player::{CueError, CuePlayer, SilentCuePlayer},
    game_event::{GameEvent, GameSnapshot},
    intent::{IgnoreReason, Intent, IntentOutcome},
    scheduler::{ScheduledTask, Scheduler, TimerEvent, TimerKind},
    session_logger::{NoSessionLogger, SessionEvent, SessionLogger},
};
pub use use_cases::game_controller::GameController;
