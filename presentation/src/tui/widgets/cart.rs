//! Shopping cart widget: one slot per question, filled with reward tokens

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

const EMPTY_SLOT: &str = "⬜";

pub struct CartWidget<'a> {
    state: &'a TuiState,
}

impl<'a> CartWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// Tokens followed by empty slots up to the question count
    pub fn slots(tokens: &[String], total: usize) -> String {
        (0..total.max(tokens.len()))
            .map(|i| tokens.get(i).map_or(EMPTY_SLOT, String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> Widget for CartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 🛒 Giỏ hàng của bé ")
            .style(Style::default().fg(Color::Magenta));

        let Some(snapshot) = &self.state.snapshot else {
            block.render(area, buf);
            return;
        };
        let tokens = snapshot.session.collected_rewards();

        let lines = vec![
            Line::from(Self::slots(tokens, snapshot.question_count)),
            Line::from(""),
            Line::from(format!("{}/{} món", tokens.len(), snapshot.question_count)),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
