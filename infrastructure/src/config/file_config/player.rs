//! Start form defaults from TOML (`[player]` section)

use serde::{Deserialize, Serialize};

/// Values pre-filled into the start screen
///
/// # Example
///
/// ```toml
/// [player]
/// name = "Linh"
/// class_name = "3A"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlayerConfig {
    pub name: Option<String>,
    pub class_name: Option<String>,
}
