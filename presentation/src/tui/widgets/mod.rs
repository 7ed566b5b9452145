//! TUI widgets: ratatui components for each screen
//!
//! Playing layout:
//! ┌── Header (4) ─────────────────────────────────────┐
//! ├── Question (flex) ──────┬── Cart (6) ─────────────┤
//! │                         ├── Hint (flex) ──────────┤
//! └── StatusBar (1) ─────────────────────────────────┘
//!
//! Start and End screens draw a centered card above the status bar.

pub mod cart;
pub mod end;
pub mod header;
pub mod hint;
pub mod question;
pub mod start;
pub mod status_bar;

use super::state::{FlashTone, TuiState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::time::Duration;

/// How long the question card shakes after the last wrong answer
const SHAKE_WINDOW: Duration = Duration::from_millis(750);

/// Main layout regions for the Playing screen
pub struct GameLayout {
    pub header: Rect,
    pub question: Rect,
    pub cart: Rect,
    pub hint: Rect,
    pub status_bar: Rect,
}

impl GameLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(vertical[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(3)])
            .split(body[1]);

        Self {
            header: vertical[0],
            question: body[0],
            cart: side[0],
            hint: side[1],
            status_bar: vertical[2],
        }
    }

    /// Card area plus status bar for the Start and End screens
    pub fn card(area: Rect, percent_x: u16, percent_y: u16) -> (Rect, Rect) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        (
            Self::centered_overlay(percent_x, percent_y, vertical[0]),
            vertical[1],
        )
    }

    /// Centered sub-rectangle covering the given percentages
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }

    /// Nudge an area sideways while a shake flash is fresh
    pub fn shaken(area: Rect, state: &TuiState) -> Rect {
        let Some(flash) = &state.flash else {
            return area;
        };
        let elapsed = flash.created.elapsed();
        if flash.tone != FlashTone::Shake || elapsed > SHAKE_WINDOW || area.width < 4 {
            return area;
        }
        // Alternate between the two halves of each redraw tick
        let offset = if (elapsed.as_millis() / 125) % 2 == 0 { 1 } else { 0 };
        Rect {
            x: area.x + offset,
            width: area.width - 1,
            ..area
        }
    }
}
