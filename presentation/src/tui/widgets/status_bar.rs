//! Status bar widget: sound indicator + key hints or flash messages

use crate::tui::mode::key_hints;
use crate::tui::state::{FlashTone, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn flash_color(tone: FlashTone) -> Color {
        match tone {
            FlashTone::Reward => Color::Magenta,
            FlashTone::Celebration => Color::Yellow,
            FlashTone::Shake => Color::Red,
            FlashTone::Info => Color::White,
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: sound indicator
        let (sound_text, sound_color) = if self.state.muted {
            (" TẮT TIẾNG ", Color::Red)
        } else {
            (" ÂM THANH ", Color::Green)
        };
        let sound_style = Style::default()
            .fg(Color::Black)
            .bg(sound_color)
            .add_modifier(Modifier::BOLD);
        let sound_line = Line::from(vec![Span::styled(sound_text, sound_style)]);
        let sound_width = sound_line.width() as u16;
        buf.set_line(area.x, area.y, &sound_line, sound_width);

        // Flash message or key hints on the right
        let right_span = match &self.state.flash {
            Some(flash) => Span::styled(
                flash.text.clone(),
                Style::default()
                    .fg(Self::flash_color(flash.tone))
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                key_hints(self.state.phase()),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        };

        let right_line = Line::from(vec![right_span]);
        let right_width = right_line.width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + sound_width {
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
