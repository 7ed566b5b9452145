//! Structured configuration issues.
//!
//! Configuration loaders report every problem they find as a [`ConfigIssue`]
//! instead of failing on the first one, so the CLI can print all warnings and
//! decide whether the remaining errors are fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the game cannot start with this configuration.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A duration or count that must be positive is zero.
    ZeroValue { field: String },
    /// A value exceeds the supported range.
    OutOfRange {
        field: String,
        value: u64,
        max: u64,
    },
    /// A string field holds a value outside its known set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Returns true if any issue is fatal.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ConfigIssue {
        ConfigIssue {
            severity,
            code: ConfigIssueCode::ZeroValue {
                field: "game.time_limit_secs".to_string(),
            },
            message: "game.time_limit_secs must be greater than zero".to_string(),
        }
    }

    #[test]
    fn test_has_errors() {
        assert!(!has_errors(&[]));
        assert!(!has_errors(&[issue(Severity::Warning)]));
        assert!(has_errors(&[issue(Severity::Warning), issue(Severity::Error)]));
    }
}
