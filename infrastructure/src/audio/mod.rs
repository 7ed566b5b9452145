//! Cue playback adapters
//!
//! Implementations of the [`CuePlayer`] port. The terminal bell is the only
//! sound source; `silent` disables it entirely.

mod bell;

pub use bell::TerminalBellPlayer;

use quiz_application::{CuePlayer, SilentCuePlayer};
use std::str::FromStr;
use std::sync::Arc;

/// Which cue player to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CueBackend {
    /// Ring the terminal bell
    #[default]
    Bell,
    /// Never make a sound
    Silent,
}

impl CueBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CueBackend::Bell => "bell",
            CueBackend::Silent => "silent",
        }
    }
}

impl FromStr for CueBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bell" | "terminal" => Ok(CueBackend::Bell),
            "silent" | "none" | "off" => Ok(CueBackend::Silent),
            other => Err(format!("unknown cue backend: {other}")),
        }
    }
}

impl std::fmt::Display for CueBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the cue player for a backend.
pub fn cue_player_for(backend: CueBackend) -> Arc<dyn CuePlayer> {
    match backend {
        CueBackend::Bell => Arc::new(TerminalBellPlayer::stdout()),
        CueBackend::Silent => Arc::new(SilentCuePlayer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!("bell".parse::<CueBackend>().unwrap(), CueBackend::Bell);
        assert_eq!("Terminal".parse::<CueBackend>().unwrap(), CueBackend::Bell);
        assert_eq!(" off ".parse::<CueBackend>().unwrap(), CueBackend::Silent);
        assert!("speakers".parse::<CueBackend>().is_err());
    }

    #[test]
    fn test_backend_round_trips_through_display() {
        for backend in [CueBackend::Bell, CueBackend::Silent] {
            assert_eq!(backend.to_string().parse::<CueBackend>().unwrap(), backend);
        }
    }
}
