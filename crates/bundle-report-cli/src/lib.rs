//! Command-line interface for bundle-report.
//!
//! Reads an esbuild metafile, converts it with [`bundle_report::transform`]
//! and either writes the report to disk or uploads it from GitHub Actions.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - `bundle-report.json` / environment / flag merging
//! - [`commands`] - `convert`, `upload` and `check`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and size formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use bundle_report_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
