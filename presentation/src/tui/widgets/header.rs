//! Header widget: player, score, question progress and countdown

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

/// Countdown turns red at or below this many seconds
pub const COUNTDOWN_WARNING_SECS: u32 = 5;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 🌟 BÉ ĐI SIÊU THỊ 🌟 ")
            .style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(snapshot) = &self.state.snapshot else {
            return;
        };
        let session = &snapshot.session;

        let remaining = session.time_remaining();
        let countdown_style = if remaining <= COUNTDOWN_WARNING_SECS {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        let sound = if self.state.muted { "🔇" } else { "🔊" };

        let line = Line::from(vec![
            Span::styled("👤 ", Style::default().fg(Color::Cyan)),
            Span::styled(
                session.player().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("⭐ {} điểm", session.score()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" | "),
            Span::raw(format!(
                "Câu {}/{}",
                snapshot.question_number(),
                snapshot.question_count
            )),
            Span::raw(" | "),
            Span::styled(format!("⏱ {remaining}s"), countdown_style),
            Span::raw(" | "),
            Span::raw(sound),
        ]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(line).render(rows[0], buf);
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .ratio(snapshot.progress_ratio().clamp(0.0, 1.0))
            .label(format!(
                "{}/{}",
                snapshot.question_number(),
                snapshot.question_count
            ))
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::GameSnapshot;
    use quiz_domain::{Player, QuestionSet, SessionState};

    fn render(state: &TuiState) -> (Buffer, String) {
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(state).render(area, &mut buf);
        let content = buf.content().iter().map(|c| c.symbol()).collect::<String>();
        (buf, content)
    }

    fn state_with_time(limit: u32, ticks: u32) -> TuiState {
        let questions = QuestionSet::supermarket().unwrap();
        let mut session = SessionState::new(limit);
        session.begin(Player::new("Linh", Some("3A")).unwrap()).unwrap();
        for _ in 0..ticks {
            session.tick().unwrap();
        }
        let mut state = TuiState::new();
        state.set_snapshot(GameSnapshot {
            question: questions.get(0).cloned(),
            session,
            question_count: questions.len(),
            muted: false,
        });
        state
    }

    #[test]
    fn test_header_shows_player_and_progress() {
        let (_, content) = render(&state_with_time(30, 0));
        assert!(content.contains("Linh (3A)"));
        assert!(content.contains("1/5"));
        assert!(content.contains("30s"));
    }

    #[test]
    fn test_countdown_red_when_low() {
        let (buf, content) = render(&state_with_time(30, 25));
        assert!(content.contains("5s"));
        let red = buf
            .content()
            .iter()
            .any(|c| c.symbol() == "5" && c.fg == Color::Red);
        assert!(red);
    }
}
