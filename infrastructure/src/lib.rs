//! Infrastructure layer for supermarket-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod audio;
pub mod config;
pub mod logging;
pub mod scheduler;

// Re-export commonly used types
pub use audio::{CueBackend, TerminalBellPlayer, cue_player_for};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAudioConfig, FileConfig, FileGameConfig,
    FileLoggingConfig, FilePlayerConfig, default_log_dir,
};
pub use logging::JsonlSessionLogger;
pub use scheduler::TokioScheduler;
