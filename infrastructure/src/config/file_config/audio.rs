//! Audio configuration from TOML (`[audio]` section)

use crate::audio::CueBackend;
use quiz_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Audio configuration
///
/// # Example
///
/// ```toml
/// [audio]
/// muted = true
/// backend = "silent"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAudioConfig {
    /// Start the game muted (default: false)
    pub muted: bool,
    /// Cue backend: "bell" or "silent" (default: "bell")
    pub backend: String,
}

impl Default for FileAudioConfig {
    fn default() -> Self {
        Self {
            muted: false,
            backend: CueBackend::default().as_str().to_string(),
        }
    }
}

impl FileAudioConfig {
    /// Parse backend string into CueBackend enum
    ///
    /// Accepts: "bell", "terminal", "silent", "none", "off"
    pub fn parse_backend(&self) -> (CueBackend, Vec<ConfigIssue>) {
        match self.backend.parse::<CueBackend>() {
            Ok(backend) => (backend, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "audio.backend".to_string(),
                        value: self.backend.clone(),
                        valid_values: vec!["bell".to_string(), "silent".to_string()],
                    },
                    message: format!(
                        "audio.backend: unknown value '{}', falling back to 'bell'",
                        self.backend
                    ),
                };
                (CueBackend::default(), vec![issue])
            }
        }
    }
}
