use crate::cli::{ReportArgs, UploadArgs};
use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ReportConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundler_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl From<&ReportArgs> for ConfigOverrides {
    fn from(args: &ReportArgs) -> Self {
        Self {
            bundle_name: args.bundle_name.clone(),
            output_dir: args.output_dir.clone(),
            bundler_name: args.bundler_name.clone(),
            bundler_version: args.bundler_version.clone(),
            ..Self::default()
        }
    }
}

impl From<&UploadArgs> for ConfigOverrides {
    fn from(args: &UploadArgs) -> Self {
        Self {
            api_url: args.api_url.clone(),
            retry_attempts: args.retry_attempts,
            retry_delay_ms: args.retry_delay_ms,
            // `--dry-run` can only switch dry runs on
            dry_run: args.dry_run.then_some(true),
            ..Self::from(&args.report)
        }
    }
}

impl ReportConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.is_file().then(|| default_path.to_path_buf())
            }
        };

        Self::figment(overrides, config_file.as_deref())
            .extract()
            .map_err(|e| {
                ConfigError::InvalidValue {
                    field: "configuration".to_string(),
                    value: e.to_string(),
                    hint: "Check bundle-report.json syntax and BUNDLE_REPORT_* variables"
                        .to_string(),
                }
                .into()
            })
    }

    fn figment(overrides: &ConfigOverrides, config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // BUNDLE_REPORT_BUNDLE_NAME, BUNDLE_REPORT_RETRY_ATTEMPTS, ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_ascii_lowercase().into()),
        );

        figment.merge(Serialized::defaults(overrides))
    }
}
