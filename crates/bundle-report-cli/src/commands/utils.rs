//! Shared helpers for the report-producing commands.

use crate::cli::ReportArgs;
use crate::config::{ConfigOverrides, ReportConfig};
use crate::error::{Result, ResultExt};
use bundle_report::{BundleReport, Metafile, transform};
use std::path::Path;

/// Load and validate configuration for a command.
pub fn load_config(args: &ReportArgs, overrides: &ConfigOverrides) -> Result<ReportConfig> {
    let config = ReportConfig::load(overrides, args.config.as_deref())?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a metafile.
pub async fn read_metafile(path: &Path) -> Result<Metafile> {
    let bytes = tokio::fs::read(path).await.with_path(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read metafile");

    Ok(Metafile::from_slice(&bytes)?)
}

/// Read the metafile named in `args` and convert it.
pub async fn build_report(args: &ReportArgs, config: &ReportConfig) -> Result<BundleReport> {
    let metafile = read_metafile(&args.metafile).await?;
    let options = config.to_transform_options(args.duration)?;

    Ok(transform(&metafile, &options))
}

/// Write `contents` to `path`, creating missing parent directories.
pub async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_path(parent)?;
    }
    tokio::fs::write(path, contents).await.with_path(path)?;
    Ok(())
}

/// Print `contents` followed by a newline to stdout.
pub async fn write_stdout(contents: &str) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(contents.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_metafile_missing() {
        let err = read_metafile(Path::new("does/not/exist.json")).await.unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_read_metafile_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        std::fs::write(&path, "not json").unwrap();

        let err = read_metafile(&path).await.unwrap_err();
        assert!(matches!(err, CliError::Metafile(_)));
    }

    #[tokio::test]
    async fn test_write_output_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports/nested/report.json");

        write_output(&path, "{}").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
