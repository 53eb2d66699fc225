//! Terminal output: status messages and report summaries.
//!
//! Messages go to stderr so `bundle-report convert` can stream report JSON
//! on stdout.
//!
//! ```no_run
//! use bundle_report_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Report written");
//! ui::warning("Not running in GitHub Actions");
//! ```

mod format;
mod messages;

pub use format::{format_size, print_report_summary};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` enables them even when stderr
/// is not a terminal.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support. `--no-color` wins over the environment.
pub fn init_colors(no_color: bool) {
    if no_color || !should_use_color() {
        owo_colors::set_override(false);
    }
}
