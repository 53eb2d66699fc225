//! Formatting utilities for sizes and report summaries.

use bundle_report::BundleReport;
use console::Term;
use owo_colors::{OwoColorize, Stream};

/// Format a byte count with the largest fitting unit.
///
/// ```
/// use bundle_report_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

fn summary_lines(report: &BundleReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .assets
        .iter()
        .map(|asset| match asset.gzip_byte_size {
            Some(gzip) => format!(
                "{}  {} ({} gzip)",
                asset.normalized_name,
                format_size(asset.byte_size),
                format_size(gzip)
            ),
            None => format!("{}  {}", asset.normalized_name, format_size(asset.byte_size)),
        })
        .collect();

    let total: u64 = report.assets.iter().map(|asset| asset.byte_size).sum();
    lines.push(format!(
        "Total: {} across {} assets, {} modules",
        format_size(total),
        report.assets.len(),
        report.modules.len()
    ));
    lines
}

/// Print the assets of `report` with their sizes to stderr.
pub fn print_report_summary(report: &BundleReport) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let mut lines = summary_lines(report);
    let footer = lines.pop().unwrap_or_default();

    eprintln!(
        "\n{}",
        report
            .bundle_name
            .if_supports_color(Stream::Stderr, |s| s.bold().underline().to_string())
    );
    eprintln!("{}", "─".repeat(width));
    for line in lines {
        eprintln!(
            "  {} {}",
            "▸".if_supports_color(Stream::Stderr, |s| s.blue().to_string()),
            line
        );
    }
    eprintln!("{}", "─".repeat(width));
    eprintln!("  {}", footer);
}
