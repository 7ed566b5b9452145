//! Log output configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output configuration
///
/// # Example
///
/// ```toml
/// [logging]
/// dir = "/tmp/quiz-logs"
/// session_log = "/tmp/quiz-logs/session.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for diagnostic logs (default: `<data_dir>/supermarket-quiz/logs`)
    pub dir: Option<PathBuf>,
    /// JSONL session transcript; disabled when unset
    pub session_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Directory for diagnostic logs, falling back to the platform data dir.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(default_log_dir)
    }
}

/// `<data_dir>/supermarket-quiz/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("supermarket-quiz").join("logs"))
}
