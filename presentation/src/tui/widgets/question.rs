//! Question widget: word problem, answer options and feedback line

use crate::tui::state::{OptionState, TuiState};
use quiz_domain::Feedback;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct QuestionWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuestionWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn option_style(option: OptionState) -> Style {
        match option {
            OptionState::Idle => Style::default().fg(Color::White),
            OptionState::Selected => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            OptionState::Correct => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            OptionState::Wrong => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT),
            OptionState::Dimmed => Style::default().fg(Color::DarkGray),
        }
    }
}

impl<'a> Widget for QuestionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(snapshot) = &self.state.snapshot else {
            return;
        };
        let Some(question) = &snapshot.question else {
            return;
        };
        let session = &snapshot.session;

        let mut lines = vec![
            Line::from(Span::styled(
                question.text(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, option) in question.options().iter().enumerate() {
            let style = Self::option_style(self.state.option_state(i));
            lines.push(Line::from(Span::styled(
                format!(" [{}] {} ", i + 1, option),
                style,
            )));
        }
        lines.push(Line::from(""));

        match session.feedback() {
            Some(Feedback::Correct) => {
                lines.push(Line::from(Span::styled(
                    "✅ CHÍNH XÁC!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("Bé nhận được: {}", question.reward()),
                    Style::default().fg(Color::Green),
                )));
            }
            Some(Feedback::Wrong) => {
                lines.push(Line::from(Span::styled(
                    "❌ SAI RỒI...",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
                let follow_up = if session.hint_visible() && session.attempts_on_current() == 0 {
                    "Đừng lo, thử lại nhé!".to_string()
                } else {
                    format!("Bé vẫn nhận được: {}", question.reward())
                };
                lines.push(Line::from(Span::styled(
                    follow_up,
                    Style::default().fg(Color::Red),
                )));
            }
            None => {}
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Câu hỏi {} ", snapshot.question_number()))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
