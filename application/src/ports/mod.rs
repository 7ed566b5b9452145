//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts between the controller and the outside world:
//! intents in, game events out, timers, cue playback and session logs.

pub mod cue_player;
pub mod game_event;
pub mod intent;
pub mod scheduler;
pub mod session_logger;
