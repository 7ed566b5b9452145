//! Configuration file loading for supermarket-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quiz.toml` or `./.quiz.toml`
//! 3. Global: `<config_dir>/supermarket-quiz/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAudioConfig, FileConfig, FileGameConfig, FileLoggingConfig,
    FilePlayerConfig, MAX_DELAY_MS, MAX_TIME_LIMIT_SECS, default_log_dir,
};
pub use loader::ConfigLoader;
