//! Key mapping per screen
//!
//! The TUI has no free-form modes; the screen follows the game phase:
//! - Start: text input for the name and class fields
//! - Playing: option selection
//! - End: restart or quit

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quiz_domain::GamePhase;

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type into the focused start-form field
    InsertChar(char),
    /// Backspace in the focused start-form field
    DeleteChar,
    /// Move focus between the name and class fields
    SwitchField,
    /// Submit the start form
    Begin,
    /// Pick option by 0-based index and submit it
    SelectOption(usize),
    /// Move the option cursor
    MoveSelection(isize),
    /// Submit the option under the cursor
    ConfirmSelection,
    /// Flip sound on or off
    ToggleMute,
    /// Play again from the end screen
    Restart,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on the current screen
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event on the given screen
    pub fn handle(phase: GamePhase, key: KeyEvent) -> Action {
        // Global bindings
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
            (KeyCode::F(2), _) => return Action::ToggleMute,
            _ => {}
        }

        match phase {
            GamePhase::Start => Self::handle_start(key),
            GamePhase::Playing => Self::handle_playing(key),
            GamePhase::End => Self::handle_end(key),
        }
    }

    fn handle_start(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Begin,
            KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Action::SwitchField,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn handle_playing(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => Action::SelectOption(c as usize - '1' as usize),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => Action::MoveSelection(-1),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => Action::MoveSelection(1),
            KeyCode::Enter | KeyCode::Char(' ') => Action::ConfirmSelection,
            KeyCode::Char('m') => Action::ToggleMute,
            _ => Action::None,
        }
    }

    fn handle_end(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Action::Restart,
            KeyCode::Char('m') => Action::ToggleMute,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Key hints for the status bar
pub fn key_hints(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Start => "Tab:đổi ô  Enter:bắt đầu  F2:âm thanh  Esc:thoát",
        GamePhase::Playing => "1-4:chọn  ↑↓+Enter:chọn  m:âm thanh  Ctrl+C:thoát",
        GamePhase::End => "r:chơi lại  m:âm thanh  q:thoát",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for phase in [GamePhase::Start, GamePhase::Playing, GamePhase::End] {
            assert_eq!(KeyHandler::handle(phase, ctrl_c), Action::Quit);
        }
    }

    #[test]
    fn test_start_screen_types_letters() {
        assert_eq!(
            KeyHandler::handle(GamePhase::Start, key(KeyCode::Char('m'))),
            Action::InsertChar('m')
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Start, key(KeyCode::Char('3'))),
            Action::InsertChar('3')
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Start, key(KeyCode::Tab)),
            Action::SwitchField
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Start, key(KeyCode::Enter)),
            Action::Begin
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Start, key(KeyCode::Esc)),
            Action::Quit
        );
    }

    #[test]
    fn test_shifted_letters_are_typed() {
        let shift_l = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyHandler::handle(GamePhase::Start, shift_l),
            Action::InsertChar('L')
        );
    }

    #[test]
    fn test_playing_digits_select_options() {
        assert_eq!(
            KeyHandler::handle(GamePhase::Playing, key(KeyCode::Char('1'))),
            Action::SelectOption(0)
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Playing, key(KeyCode::Char('4'))),
            Action::SelectOption(3)
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Playing, key(KeyCode::Char('5'))),
            Action::None
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Playing, key(KeyCode::Up)),
            Action::MoveSelection(-1)
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::Playing, key(KeyCode::Enter)),
            Action::ConfirmSelection
        );
    }

    #[test]
    fn test_mute_bindings() {
        let f2 = key(KeyCode::F(2));
        for phase in [GamePhase::Start, GamePhase::Playing, GamePhase::End] {
            assert_eq!(KeyHandler::handle(phase, f2), Action::ToggleMute);
        }
        assert_eq!(
            KeyHandler::handle(GamePhase::Playing, key(KeyCode::Char('m'))),
            Action::ToggleMute
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::End, key(KeyCode::Char('m'))),
            Action::ToggleMute
        );
    }

    #[test]
    fn test_end_screen() {
        assert_eq!(
            KeyHandler::handle(GamePhase::End, key(KeyCode::Char('r'))),
            Action::Restart
        );
        assert_eq!(
            KeyHandler::handle(GamePhase::End, key(KeyCode::Char('q'))),
            Action::Quit
        );
    }
}
