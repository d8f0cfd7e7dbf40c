//! Console output formatter for answer records

use colored::Colorize;
use podlens_domain::{OutputFormat, Record};

/// Formats answer records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format records in the requested output format
    pub fn format(records: &[Record], format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(records),
            OutputFormat::Json => Self::format_json(records),
        }
    }

    /// One block per record: bold title, rule, then the indented content
    pub fn format_text(records: &[Record]) -> String {
        let mut output = String::new();

        for record in records {
            output.push_str(&format!("\n{}\n", Self::title_line(&record.title)));
            if record.content.is_empty() {
                output.push_str(&format!("{}\n", Self::indent("(no text)", "  ").dimmed()));
            } else {
                output.push_str(&Self::indent(&record.content, "  "));
                output.push('\n');
            }
        }

        output
    }

    /// Format as a JSON array of `{title, content}` objects
    pub fn format_json(records: &[Record]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    fn title_line(title: &str) -> String {
        let title = if title.is_empty() { "(untitled)" } else { title };
        format!("{} {}", "──".cyan(), title.yellow().bold())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
