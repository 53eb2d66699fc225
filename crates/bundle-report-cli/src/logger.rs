//! Logging setup for the bundle-report CLI.
//!
//! The library emits `tracing` events (retries, skipped source maps,
//! unreadable outputs); this module installs the subscriber that prints them.
//!
//! # Example
//!
//! ```rust,no_run
//! use bundle_report_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("converting metafile");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "bundle_report=debug,bundle_report_cli=debug";
const QUIET_FILTER: &str = "bundle_report=error,bundle_report_cli=error";
const DEFAULT_FILTER: &str = "bundle_report=info,bundle_report_cli=info";

/// Initialize the tracing subscriber.
///
/// The filter is picked in this order:
/// 1. `--verbose`: debug for both crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for both crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
