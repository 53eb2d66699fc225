use crate::config::ReportConfig;
use crate::error::{ConfigError, Result};

impl ReportConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        match self.bundle_name.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(ConfigError::MissingField {
                    field: "bundleName".to_string(),
                    hint: "Pass --bundle-name or set bundleName in bundle-report.json".to_string(),
                }
                .into());
            }
            Some(_) => {}
        }

        if self.retry_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retryAttempts".to_string(),
                value: "0".to_string(),
                hint: "At least one attempt is required".to_string(),
            }
            .into());
        }

        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "apiUrl".to_string(),
                value: self.api_url.clone(),
                hint: "Use an http:// or https:// URL".to_string(),
            }
            .into());
        }

        if self.bundler_version.is_some() && self.bundler_name.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "bundlerVersion".to_string(),
                value: self.bundler_version.clone().unwrap_or_default(),
                hint: "Set bundlerName as well, e.g. --bundler-name esbuild".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
