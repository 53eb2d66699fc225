use bundle_report::upload::{DEFAULT_API_URL, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bundle-report.json";

/// Prefix of environment variables that override config values.
pub const ENV_PREFIX: &str = "BUNDLE_REPORT_";

/// Bundler version recorded when only a bundler name is configured.
pub const UNKNOWN_BUNDLER_VERSION: &str = "unknown";

pub fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

pub fn default_retry_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

pub fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}
