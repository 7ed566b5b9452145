//! End screen: score, cart and title

use super::cart::CartWidget;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub struct EndWidget<'a> {
    state: &'a TuiState,
}

impl<'a> EndWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for EndWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White));

        let Some(snapshot) = &self.state.snapshot else {
            block.render(area, buf);
            return;
        };
        let session = &snapshot.session;
        let label = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(
                "🏆 XUẤT SẮC!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Bé đã hoàn thành chuyến đi siêu thị"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Tổng điểm: ", label),
                Span::styled(
                    session.score().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Món đồ: ", label),
                Span::raw(format!(
                    "{}/{}",
                    session.collected_rewards().len(),
                    snapshot.question_count
                )),
            ]),
            Line::from(CartWidget::slots(
                session.collected_rewards(),
                snapshot.question_count,
            )),
            Line::from(""),
        ];

        if let Some(title) = snapshot.title() {
            lines.push(Line::from(Span::styled("Danh hiệu", label)));
            lines.push(Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        let player = session.player();
        lines.push(Line::from(vec![
            Span::styled("Họ tên: ", label),
            Span::raw(player.name().to_string()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Lớp: ", label),
            Span::raw(player.class_name().unwrap_or("-").to_string()),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "r: 🔄 CHƠI LẠI",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
