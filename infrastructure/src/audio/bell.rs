//! Terminal bell cue player.

use quiz_application::{CueError, CuePlayer};
use quiz_domain::Cue;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell for cues that matter to the player.
///
/// `Click` and the background loop are silent.
pub struct TerminalBellPlayer<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl TerminalBellPlayer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalBellPlayer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn rings_for(cue: Cue) -> bool {
        matches!(cue, Cue::Correct | Cue::Wrong | Cue::Win | Cue::Tick)
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> CuePlayer for TerminalBellPlayer<W> {
    fn play(&self, cue: Cue) -> Result<(), CueError> {
        if !Self::rings_for(cue) {
            return Ok(());
        }
        let mut out = self
            .out
            .lock()
            .map_err(|_| CueError::Rejected("bell output poisoned".to_string()))?;
        out.write_all(BEL)?;
        out.flush()?;
        Ok(())
    }
}
