//! Console output formatter for generated study guides

use colored::Colorize;
use studyhall_domain::StudyGuide;
use studyhall_domain::util::format_elapsed;

/// Formats study guides for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a complete guide: header, topic, guide text, footer.
    ///
    /// Used on the non-streaming path where nothing has been printed yet.
    pub fn format(guide: &StudyGuide) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Study Guide"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Topic:".cyan().bold(),
            guide.topic()
        ));

        output.push_str(guide.content());
        output.push('\n');

        output.push_str(&Self::rule());
        output.push('\n');
        output.push_str(&Self::format_footer(guide));

        output
    }

    /// Format only the closing stats line.
    ///
    /// Used on the streaming path, where the guide text already reached the
    /// terminal chunk by chunk.
    pub fn format_footer(guide: &StudyGuide) -> String {
        format!(
            "{}",
            format!(
                "{} · {} · {} words",
                guide.model(),
                format_elapsed(guide.elapsed()),
                guide.word_count()
            )
            .dimmed()
        )
    }

    /// Format as JSON
    pub fn format_json(guide: &StudyGuide) -> String {
        serde_json::to_string_pretty(guide).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn rule() -> String {
        format!("{}", "-".repeat(60).cyan())
    }
}
