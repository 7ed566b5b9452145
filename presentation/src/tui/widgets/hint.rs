//! Hint widget

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct HintWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HintWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HintWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 💡 Gợi ý cho bé ")
            .style(Style::default().fg(Color::Yellow));

        let hint = self.state.snapshot.as_ref().and_then(|s| {
            s.session
                .hint_visible()
                .then(|| s.question.as_ref().map(|q| q.hint()))
                .flatten()
        });

        let line = match hint {
            Some(text) => Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled("…", Style::default().fg(Color::DarkGray))),
        };

        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
