#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use bundle_report::upload::DEFAULT_API_URL;
    use figment::Jail;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    fn named(name: &str) -> ReportConfig {
        ReportConfig {
            bundle_name: Some(name.to_string()),
            ..ReportConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_delay_ms, 1000);
        assert!(!config.dry_run);

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("apiUrl").is_some());
        assert!(json.get("bundleName").is_none());
    }

    #[test]
    fn test_validation() {
        assert!(named("web").validate().is_ok());

        let err = ReportConfig::default().validate().unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::MissingField { ref field, .. }) if field == "bundleName"
        ));
        assert!(named("  ").validate().is_err());

        assert!(ReportConfig { retry_attempts: 0, ..named("web") }.validate().is_err());
        assert!(
            ReportConfig { api_url: "api.codecov.io".into(), ..named("web") }
                .validate()
                .is_err()
        );
        assert!(
            ReportConfig { bundler_version: Some("1.0.0".into()), ..named("web") }
                .validate()
                .is_err()
        );
        assert!(
            ReportConfig {
                bundler_name: Some("esbuild".into()),
                ..named("web")
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_conversions() {
        let config = ReportConfig {
            output_dir: Some(PathBuf::from("dist")),
            bundler_name: Some("esbuild".into()),
            retry_attempts: 5,
            retry_delay_ms: 20,
            ..named("web")
        };

        let options = config.to_transform_options(Some(900)).unwrap();
        assert_eq!(options.bundle_name, "web");
        assert_eq!(options.output_dir, Some(PathBuf::from("dist")));
        assert_eq!(options.duration, Some(900));
        let bundler = options.bundler.unwrap();
        assert_eq!(bundler.name, "esbuild");
        assert_eq!(bundler.version, UNKNOWN_BUNDLER_VERSION);

        let upload = config.to_upload_options();
        assert_eq!(upload.retry.max_attempts, 5);
        assert_eq!(upload.retry.delay, Duration::from_millis(20));

        assert!(ReportConfig::default().to_transform_options(None).is_err());
    }

    #[test]
    fn test_load_layers() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "bundle-report.json",
                r#"{ "bundleName": "from-file", "outputDir": "build", "retryAttempts": 4 }"#,
            )?;

            let config = ReportConfig::load(&ConfigOverrides::default(), None).unwrap();
            assert_eq!(config.bundle_name.as_deref(), Some("from-file"));
            assert_eq!(config.output_dir, Some(PathBuf::from("build")));
            assert_eq!(config.retry_attempts, 4);
            assert_eq!(config.retry_delay_ms, 1000);

            jail.set_env("BUNDLE_REPORT_BUNDLE_NAME", "from-env");
            jail.set_env("BUNDLE_REPORT_RETRY_DELAY_MS", "250");
            let config = ReportConfig::load(&ConfigOverrides::default(), None).unwrap();
            assert_eq!(config.bundle_name.as_deref(), Some("from-env"));
            assert_eq!(config.retry_delay_ms, 250);
            assert_eq!(config.retry_attempts, 4);

            let overrides = ConfigOverrides {
                bundle_name: Some("from-cli".into()),
                dry_run: Some(true),
                ..ConfigOverrides::default()
            };
            let config = ReportConfig::load(&overrides, None).unwrap();
            assert_eq!(config.bundle_name.as_deref(), Some("from-cli"));
            assert_eq!(config.retry_delay_ms, 250);
            assert!(config.dry_run);

            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_path() {
        Jail::expect_with(|jail| {
            jail.create_file("ci.json", r#"{ "bundleName": "ci", "dryRun": true }"#)?;

            let config = ReportConfig::load(&ConfigOverrides::default(), Some(Path::new("ci.json")))
                .unwrap();
            assert_eq!(config.bundle_name.as_deref(), Some("ci"));
            assert!(config.dry_run);

            let err = ReportConfig::load(&ConfigOverrides::default(), Some(Path::new("missing.json")))
                .unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));

            Ok(())
        });
    }

    #[test]
    fn test_invalid_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("bundle-report.json", r#"{ "retryAttempts": "many" }"#)?;

            let err = ReportConfig::load(&ConfigOverrides::default(), None).unwrap_err();
            assert!(matches!(
                err,
                CliError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "configuration"
            ));

            Ok(())
        });
    }
}
