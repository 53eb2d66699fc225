//! Check command implementation.
//!
//! Parses a metafile and reports what a conversion would see, without
//! needing a bundle name or writing anything.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use bundle_report::Metafile;
use bundle_report::metafile::{ImportKind, MetafileOutput};

/// Counts gathered from one metafile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetafileSummary {
    pub inputs: usize,
    pub outputs: usize,
    pub source_maps: usize,
    pub entry_points: usize,
    pub dynamic_imports: usize,
    /// Bytes across outputs that become assets
    pub asset_bytes: u64,
}

impl MetafileSummary {
    pub fn from_metafile(metafile: &Metafile) -> Self {
        let mut summary = Self {
            inputs: metafile.inputs.len(),
            outputs: metafile.outputs.len(),
            ..Self::default()
        };

        for (path, output) in &metafile.outputs {
            if MetafileOutput::is_source_map(path) {
                summary.source_maps += 1;
                continue;
            }
            summary.asset_bytes += output.bytes;
            if output.entry_point.is_some() {
                summary.entry_points += 1;
            }
            summary.dynamic_imports += output
                .imports
                .iter()
                .filter(|import| import.kind == ImportKind::DynamicImport && !import.external)
                .count();
        }

        summary
    }

    /// Outputs that turn into assets and chunks.
    pub fn assets(&self) -> usize {
        self.outputs - self.source_maps
    }
}

/// Execute the check command.
pub async fn execute(args: CheckArgs) -> Result<()> {
    let metafile = utils::read_metafile(&args.metafile).await?;
    let summary = MetafileSummary::from_metafile(&metafile);

    ui::info(&format!(
        "{} inputs, {} outputs ({} source maps)",
        summary.inputs, summary.outputs, summary.source_maps
    ));
    ui::info(&format!(
        "{} assets totalling {}, {} entry points, {} dynamic imports",
        summary.assets(),
        ui::format_size(summary.asset_bytes),
        summary.entry_points,
        summary.dynamic_imports
    ));

    if summary.assets() == 0 {
        ui::warning("Metafile has no outputs; the report would be empty");
    } else {
        ui::success(&format!("{} is a valid metafile", args.metafile.display()));
    }

    Ok(())
}
