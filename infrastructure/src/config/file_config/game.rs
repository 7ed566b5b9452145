//! Game timing configuration from TOML (`[game]` section)

use quiz_application::GameSettings;
use quiz_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_TIME_LIMIT_SECS, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest countdown accepted, in seconds. The countdown can be shortened
/// but never run past the 30 seconds a question is played with.
pub const MAX_TIME_LIMIT_SECS: u32 = DEFAULT_TIME_LIMIT_SECS;

/// Longest feedback window accepted, in milliseconds.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Game timing configuration
///
/// # Example
///
/// ```toml
/// [game]
/// time_limit_secs = 20
/// correct_delay_ms = 2000
/// retry_delay_ms = 1500
/// final_wrong_delay_ms = 1500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Seconds per attempt, 1 to 30 (default: 30)
    pub time_limit_secs: u32,
    /// Pause after a correct answer before the next question (default: 2000)
    pub correct_delay_ms: u64,
    /// Pause after a first wrong answer before the retry (default: 1500)
    pub retry_delay_ms: u64,
    /// Pause after the last wrong answer before moving on (default: 1500)
    pub final_wrong_delay_ms: u64,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            time_limit_secs: settings.time_limit_secs,
            correct_delay_ms: settings.correct_delay.as_millis() as u64,
            retry_delay_ms: settings.retry_delay.as_millis() as u64,
            final_wrong_delay_ms: settings.final_wrong_delay.as_millis() as u64,
        }
    }
}

impl FileGameConfig {
    /// Check ranges, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.time_limit_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroValue {
                    field: "game.time_limit_secs".to_string(),
                },
                message: "game.time_limit_secs must be greater than zero".to_string(),
            });
        } else if self.time_limit_secs > MAX_TIME_LIMIT_SECS {
            issues.push(out_of_range(
                "game.time_limit_secs",
                self.time_limit_secs.into(),
                MAX_TIME_LIMIT_SECS.into(),
            ));
        }

        for (field, value) in [
            ("game.correct_delay_ms", self.correct_delay_ms),
            ("game.retry_delay_ms", self.retry_delay_ms),
            ("game.final_wrong_delay_ms", self.final_wrong_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                issues.push(out_of_range(field, value, MAX_DELAY_MS));
            }
        }

        issues
    }

    /// Convert to application settings. Call [`validate`](Self::validate)
    /// first; values are taken as-is.
    pub fn to_settings(&self) -> GameSettings {
        GameSettings::default()
            .with_time_limit_secs(self.time_limit_secs)
            .with_correct_delay(Duration::from_millis(self.correct_delay_ms))
            .with_retry_delay(Duration::from_millis(self.retry_delay_ms))
            .with_final_wrong_delay(Duration::from_millis(self.final_wrong_delay_ms))
    }
}

fn out_of_range(field: &str, value: u64, max: u64) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        code: ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value,
            max,
        },
        message: format!("{field}: {value} exceeds the maximum of {max}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_default_matches_settings() {
        let config = FileGameConfig::default();
        assert_eq!(config.time_limit_secs, 30);
        assert_eq!(config.correct_delay_ms, 2000);
        assert_eq!(config.retry_delay_ms, 1500);
        assert_eq!(config.final_wrong_delay_ms, 1500);
        assert_eq!(config.to_settings(), GameSettings::default());
    }

    #[test]
    fn test_game_config_partial() {
        let toml_str = r#"
[game]
time_limit_secs = 20
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.time_limit_secs, 20);
        assert_eq!(config.game.correct_delay_ms, 2000);

        let settings = config.game.to_settings();
        assert_eq!(settings.time_limit_secs, 20);
        assert_eq!(settings.correct_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = FileGameConfig {
            time_limit_secs: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::ZeroValue { field } if field == "game.time_limit_secs"
        ));
    }

    #[test]
    fn test_validate_time_limit_capped_at_default() {
        let at_cap = FileGameConfig {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            ..Default::default()
        };
        assert!(at_cap.validate().is_empty());

        let config = FileGameConfig {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS + 1,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::OutOfRange { field, value: 31, max: 30 } if field == "game.time_limit_secs"
        ));
    }

    #[test]
    fn test_validate_delays_out_of_range() {
        let config = FileGameConfig {
            retry_delay_ms: MAX_DELAY_MS + 1,
            final_wrong_delay_ms: MAX_DELAY_MS * 2,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::OutOfRange { field, .. } if field == "game.retry_delay_ms"
        )));
    }

    #[test]
    fn test_validate_zero_delay_allowed() {
        let config = FileGameConfig {
            correct_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_empty());
    }
}
