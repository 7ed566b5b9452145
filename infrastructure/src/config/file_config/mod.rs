//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; [`FileConfig::to_game_settings`] turns the
//! validated result into the application's [`GameSettings`].

mod audio;
mod game;
mod logging;
mod player;

pub use audio::FileAudioConfig;
pub use game::{FileGameConfig, MAX_DELAY_MS, MAX_TIME_LIMIT_SECS};
pub use logging::{FileLoggingConfig, default_log_dir};
pub use player::FilePlayerConfig;

use quiz_application::GameSettings;
use quiz_domain::{ConfigIssue, has_errors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", messages.join("; "))]
    Invalid { messages: Vec<String> },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Countdown and feedback windows
    pub game: FileGameConfig,
    /// Mute and cue backend
    pub audio: FileAudioConfig,
    /// Start form defaults
    pub player: FilePlayerConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Game timing ranges (errors)
    /// 2. Enum parse failures for the audio backend (warnings)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.game.validate();
        issues.extend(self.audio.parse_backend().1);
        issues
    }

    /// Typed settings for the controller. Fails when validation finds errors.
    pub fn to_game_settings(&self) -> Result<GameSettings, ConfigValidationError> {
        let issues = self.validate();
        if has_errors(&issues) {
            return Err(ConfigValidationError::Invalid {
                messages: issues
                    .into_iter()
                    .filter(ConfigIssue::is_error)
                    .map(|i| i.message)
                    .collect(),
            });
        }
        Ok(self.game.to_settings().with_start_muted(self.audio.muted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::CueBackend;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[game]
time_limit_secs = 20
correct_delay_ms = 1000
retry_delay_ms = 800
final_wrong_delay_ms = 900

[audio]
muted = true
backend = "silent"

[player]
name = "Nam"
class_name = "4B"

[logging]
session_log = "session.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.time_limit_secs, 20);
        assert_eq!(config.audio.parse_backend().0, CueBackend::Silent);
        assert_eq!(config.player.class_name.as_deref(), Some("4B"));
        assert!(config.logging.session_log.is_some());

        let settings = config.to_game_settings().unwrap();
        assert_eq!(settings.time_limit_secs, 20);
        assert_eq!(settings.retry_delay, Duration::from_millis(800));
        assert_eq!(settings.final_wrong_delay, Duration::from_millis(900));
        assert!(settings.start_muted);
    }

    #[test]
    fn test_default_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.to_game_settings().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_warnings_do_not_block_settings() {
        let toml_str = r#"
[audio]
backend = "trumpet"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 1);
        assert!(config.to_game_settings().is_ok());
    }

    #[test]
    fn test_errors_block_settings() {
        let toml_str = r#"
[game]
time_limit_secs = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let err = config.to_game_settings().unwrap_err();
        assert!(err.to_string().contains("game.time_limit_secs"));
    }
}
