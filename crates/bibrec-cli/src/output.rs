//! Output formatting utilities.

use bibrec_core::Diagnostic;
use serde::Serialize;

/// Formats any serializable value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a diagnostic as a table row.
pub fn format_diagnostic_row(diagnostic: &Diagnostic) -> String {
    format!(
        "  {:<24} {:<32} {}",
        diagnostic.code.as_str(),
        truncate(&diagnostic.path, 32),
        diagnostic.message
    )
}

/// Prints a two-column table header.
pub fn print_table_header(left: &str, right: &str, width: usize) {
    println!("{:<width$} {}", left, right, width = width);
    println!("{}", "-".repeat(width + 1 + right.len().max(20)));
}

/// Shortens `s` to at most `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
