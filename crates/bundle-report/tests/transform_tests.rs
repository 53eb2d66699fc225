//! Integration tests for turning a real-world shaped metafile into a report.
//!
//! The fixture mirrors what esbuild writes for a small app with code
//! splitting, a CSS bundle, a source map and an unused input.

use bundle_report::{BundlerInfo, Metafile, TransformOptions, transform};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/metafile.json");

fn metafile() -> Metafile {
    FIXTURE.parse().expect("fixture parses")
}

fn options() -> TransformOptions {
    TransformOptions::new("web-app")
        .bundler(BundlerInfo::new("esbuild", "0.24.0"))
        .built_at(1_700_000_000_000)
        .duration(1234)
}

#[test]
fn test_report_structure_from_fixture() {
    let report = transform(&metafile(), &options());

    assert_eq!(report.schema_version, "3");
    assert_eq!(report.bundle_name, "web-app");
    assert_eq!(report.assets.len(), 3);
    assert_eq!(report.chunks.len(), 3);
    assert_eq!(report.modules.len(), 5);

    let ids: Vec<_> = report.chunks.iter().map(|c| c.unique_id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "0-dist/index-5f3c2a9b.js",
            "2-dist/settings-0a1b2c3d.js",
            "3-dist/index-9e8d7c6b.css",
        ]
    );

    let normalized: Vec<_> = report
        .assets
        .iter()
        .map(|a| a.normalized_name.as_str())
        .collect();
    assert_eq!(
        normalized,
        ["dist/index-*.js", "dist/settings-*.js", "dist/index-*.css"]
    );
}

#[test]
fn test_entry_and_dynamic_chunks() {
    let report = transform(&metafile(), &options());

    let entry = &report.chunks[0];
    assert!(entry.is_entry && entry.is_initial);
    assert_eq!(entry.names, ["index"]);
    assert_eq!(entry.dynamic_import_targets, ["dist/settings-0a1b2c3d.js"]);

    let lazy = &report.chunks[1];
    assert!(!lazy.is_entry && !lazy.is_initial);
    assert_eq!(lazy.names, ["settings-0a1b2c3d"]);
}

#[test]
fn test_module_membership() {
    let report = transform(&metafile(), &options());

    let membership = |name: &str| {
        report
            .modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.member_of_chunk_unique_ids.clone())
            .unwrap()
    };

    assert_eq!(membership("src/index.ts"), ["0-dist/index-5f3c2a9b.js"]);
    assert_eq!(membership("src/components/App.tsx"), ["0-dist/index-5f3c2a9b.js"]);
    assert_eq!(membership("src/pages/settings.ts"), ["2-dist/settings-0a1b2c3d.js"]);
    assert_eq!(membership("src/styles/app.css"), ["3-dist/index-9e8d7c6b.css"]);
    assert!(membership("src/legacy/unused.js").is_empty());
}

#[test]
fn test_gzip_sizes_from_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path();
    fs::write(
        out.join("index-5f3c2a9b.js"),
        "import('./settings-0a1b2c3d.js');\n".repeat(40),
    )
    .unwrap();
    fs::write(out.join("index-9e8d7c6b.css"), "body{margin:0}").unwrap();
    // settings chunk deliberately missing from disk

    let report = transform(&metafile(), &options().output_dir(out));

    let js = report.assets[0].gzip_byte_size.expect("js gzip size");
    assert!(js > 0 && js < 40 * 34);
    assert_eq!(report.assets[1].gzip_byte_size, None);
    assert!(report.assets[2].gzip_byte_size.is_some());
}

#[test]
fn test_report_json_wire_format() {
    let report = transform(&metafile(), &options());
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["version"], "3");
    assert_eq!(value["bundleName"], "web-app");
    assert_eq!(value["builtAt"], 1_700_000_000_000_i64);
    assert_eq!(value["duration"], 1234);
    assert_eq!(value["bundler"], json!({ "name": "esbuild", "version": "0.24.0" }));
    assert_eq!(value["plugin"]["name"], "bundle-report");

    assert_eq!(
        value["assets"][0],
        json!({
            "name": "dist/index-5f3c2a9b.js",
            "size": 1450,
            "gzipSize": null,
            "normalized": "dist/index-*.js"
        })
    );
    assert_eq!(
        value["chunks"][0]["dynamicImports"],
        json!(["dist/settings-0a1b2c3d.js"])
    );
    assert_eq!(value["modules"][4]["chunkUniqueIds"], json!([]));
}

#[test]
fn test_empty_metafile() {
    let metafile: Metafile = r#"{ "inputs": {}, "outputs": {} }"#.parse().unwrap();
    let report = transform(&metafile, &TransformOptions::new("empty"));

    assert_eq!(report.schema_version, "3");
    assert!(report.assets.is_empty());
    assert!(report.chunks.is_empty());
    assert!(report.modules.is_empty());
}
