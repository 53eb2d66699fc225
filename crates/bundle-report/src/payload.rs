//! Codecov bundle-analysis report, schema version 3.
//!
//! Field names on the Rust side describe what each value is; the serde
//! renames produce the exact keys the Codecov ingestion service expects.

use serde::{Deserialize, Serialize};

/// Schema version written into every report.
pub const SCHEMA_VERSION: &str = "3";

/// Complete report for one bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleReport {
    #[serde(rename = "version")]
    pub schema_version: String,
    pub bundle_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundler: Option<BundlerInfo>,
    /// Build time in milliseconds since the Unix epoch
    pub built_at: i64,
    /// Build duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub assets: Vec<Asset>,
    pub chunks: Vec<Chunk>,
    pub modules: Vec<Module>,
    #[serde(rename = "plugin")]
    pub producer: ProducerInfo,
}

impl BundleReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Name and version of the bundler that produced the metafile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlerInfo {
    pub name: String,
    pub version: String,
}

impl BundlerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Name and version of the tool that generated the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerInfo {
    pub name: String,
    pub version: String,
}

impl ProducerInfo {
    /// This crate, as recorded by Cargo at compile time.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// An emitted file with its raw and compressed sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    #[serde(rename = "size")]
    pub byte_size: u64,
    /// `None` serializes as `null`: unknown, or not a compressible type
    #[serde(rename = "gzipSize")]
    pub gzip_byte_size: Option<u64>,
    /// Name with its content hash replaced by `*`
    #[serde(rename = "normalized")]
    pub normalized_name: String,
}

/// An emitted file seen as a code-splitting unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: String,
    pub unique_id: String,
    #[serde(rename = "entry")]
    pub is_entry: bool,
    #[serde(rename = "initial")]
    pub is_initial: bool,
    pub names: Vec<String>,
    pub files: Vec<String>,
    #[serde(rename = "dynamicImports")]
    pub dynamic_import_targets: Vec<String>,
}

/// A source file and the chunks it ended up in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,
    #[serde(rename = "size")]
    pub byte_size: u64,
    #[serde(rename = "chunkUniqueIds")]
    pub member_of_chunk_unique_ids: Vec<String>,
}
