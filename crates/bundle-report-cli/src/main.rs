//! bundle-report CLI - esbuild metafiles to Codecov bundle reports.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use bundle_report_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Convert(convert_args) => commands::convert_execute(convert_args).await,
        cli::Command::Upload(upload_args) => commands::upload_execute(upload_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
