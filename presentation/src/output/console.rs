//! Console output for game summaries and configuration issues

use colored::Colorize;
use quiz_application::GameSnapshot;
use quiz_domain::{ConfigIssue, GamePhase, Severity};

/// Formats text printed to the normal terminal screen
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary of a finished game. `None` if the game never reached the end
    /// screen.
    pub fn game_summary(snapshot: &GameSnapshot) -> Option<String> {
        if snapshot.phase() != GamePhase::End {
            return None;
        }
        let session = &snapshot.session;
        let title = snapshot.title()?;

        let mut output = String::new();
        output.push_str(&Self::header("Bé đi siêu thị"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Họ tên:".cyan().bold(),
            session.player()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Tổng điểm:".cyan().bold(),
            session.score().to_string().yellow().bold()
        ));
        output.push_str(&format!(
            "{} {}/{} {}\n",
            "Món đồ:".cyan().bold(),
            session.collected_rewards().len(),
            snapshot.question_count,
            session.collected_rewards().join(" ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Danh hiệu:".cyan().bold(),
            title.to_string().green().bold()
        ));
        Some(output)
    }

    /// One line per configuration issue
    pub fn config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}\n", "error:".red().bold(), issue.message),
                Severity::Warning => {
                    format!("{} {}\n", "warning:".yellow().bold(), issue.message)
                }
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "═".repeat(40);
        format!("{}\n  {}\n{}\n", line.green(), title.green().bold(), line.green())
    }
}
