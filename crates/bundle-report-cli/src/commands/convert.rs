//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

/// Execute the convert command.
///
/// 1. Merge configuration and require a bundle name
/// 2. Read and transform the metafile
/// 3. Write pretty JSON to `--out`, or stdout
pub async fn execute(args: ConvertArgs) -> Result<()> {
    let config = utils::load_config(&args.report, &ConfigOverrides::from(&args.report))?;
    let report = utils::build_report(&args.report, &config).await?;
    let json = report.to_pretty_json()?;

    match &args.out {
        Some(out) => {
            utils::write_output(out, &json).await?;
            ui::print_report_summary(&report);
            ui::success(&format!("Report written to {}", out.display()));
        }
        None => utils::write_stdout(&json).await?,
    }

    Ok(())
}
