//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream};

/// Print a success message to stderr.
///
/// ```no_run
/// use bundle_report_cli::ui::success;
///
/// success("Report uploaded");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |s| s.green().bold().to_string()),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stream::Stderr, |s| s.blue().bold().to_string()),
        message
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stream::Stderr, |s| s.yellow().bold().to_string()),
        message.if_supports_color(Stream::Stderr, |s| s.yellow().to_string())
    );
}
