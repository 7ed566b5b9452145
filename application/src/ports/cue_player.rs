//! Cue playback port
//!
//! Defines the interface the presenter uses to turn [`Cue`]s into sound.
//! Playback is best-effort: callers ignore [`CueError`] beyond a debug log.

use quiz_domain::Cue;
use thiserror::Error;

/// Playback failure
#[derive(Error, Debug)]
pub enum CueError {
    #[error("Playback rejected: {0}")]
    Rejected(String),

    #[error("Playback I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Plays audio cues and the background loop
pub trait CuePlayer: Send + Sync {
    /// Play a one-shot cue.
    fn play(&self, cue: Cue) -> Result<(), CueError>;

    /// Start or stop the background loop.
    fn set_background(&self, _playing: bool) -> Result<(), CueError> {
        Ok(())
    }
}

/// Player that never makes a sound
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: Cue) -> Result<(), CueError> {
        Ok(())
    }
}
