//! Start screen: name and class form

use crate::tui::state::{FormField, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub struct StartWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StartWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn field(label: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Vec<Line<'a>> {
        let label_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD);
        let value_span = if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value, Style::default().fg(Color::White))
        };
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "▏" } else { " " };

        vec![
            Line::from(Span::styled(label, label_style)),
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                value_span,
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]),
            Line::from(""),
        ]
    }
}

impl<'a> Widget for StartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = &self.state.form;

        let mut lines = vec![
            Line::from(Span::styled(
                "🌟 BÉ ĐI SIÊU THỊ 🌟",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(Self::field(
            "Tên của bé:",
            &form.name,
            "Nhập tên bé...",
            form.focus == FormField::Name,
        ));
        lines.extend(Self::field(
            "Lớp của bé:",
            &form.class_name,
            "Nhập lớp bé...",
            form.focus == FormField::Class,
        ));
        lines.push(Line::from(Span::styled(
            "Enter: BẮT ĐẦU CHƠI ➜",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
