use crate::config::{ReportConfig, UNKNOWN_BUNDLER_VERSION};
use crate::error::{ConfigError, Result};
use bundle_report::{BundlerInfo, RetryPolicy, TransformOptions, UploadOptions};
use std::time::Duration;

impl ReportConfig {
    /// Options for [`bundle_report::transform`]. `duration` comes from the
    /// command line only since it differs per build.
    pub fn to_transform_options(&self, duration: Option<u64>) -> Result<TransformOptions> {
        let bundle_name = self
            .bundle_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "bundleName".to_string(),
                hint: "Pass --bundle-name or set bundleName in bundle-report.json".to_string(),
            })?;

        let mut options = TransformOptions::new(bundle_name);
        options.output_dir = self.output_dir.clone();
        options.duration = duration;
        options.bundler = self.bundler_name.as_ref().map(|name| {
            BundlerInfo::new(
                name.as_str(),
                self.bundler_version
                    .as_deref()
                    .unwrap_or(UNKNOWN_BUNDLER_VERSION),
            )
        });

        Ok(options)
    }

    pub fn to_upload_options(&self) -> UploadOptions {
        UploadOptions {
            api_url: self.api_url.clone(),
            retry: RetryPolicy::new(
                self.retry_attempts,
                Duration::from_millis(self.retry_delay_ms),
            ),
        }
    }
}
