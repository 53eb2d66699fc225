//! Configuration with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and
//! `bundle-report.json`. Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod tests;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::ConfigOverrides;

/// bundle-report configuration, loaded from bundle-report.json or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Name the bundle is tracked under
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "bundle_name")]
    pub bundle_name: Option<String>,

    /// Directory holding the emitted files
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "output_dir")]
    pub output_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "bundler_name")]
    pub bundler_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "bundler_version")]
    pub bundler_version: Option<String>,

    /// Endpoint that issues presigned upload URLs
    #[serde(default = "default_api_url", alias = "api_url")]
    pub api_url: String,

    /// Attempts per upload request
    #[serde(default = "default_retry_attempts", alias = "retry_attempts")]
    pub retry_attempts: u32,

    /// Pause between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms", alias = "retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Print the report instead of uploading it
    #[serde(default, alias = "dry_run")]
    pub dry_run: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bundle_name: None,
            output_dir: None,
            bundler_name: None,
            bundler_version: None,
            api_url: default_api_url(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            dry_run: false,
        }
    }
}
