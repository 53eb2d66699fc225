//! esbuild metafile model.
//!
//! Only the fields the report needs are modeled; unknown keys are ignored so
//! newer esbuild releases keep parsing. Both maps preserve document order,
//! which matters because chunk ordinals follow the order of `outputs`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a metafile document.
#[derive(Debug, Error)]
pub enum MetafileError {
    /// The document is not valid JSON or does not match the metafile shape
    #[error("invalid metafile: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build manifest describing source inputs and emitted outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metafile {
    #[serde(default)]
    pub inputs: IndexMap<String, MetafileInput>,
    #[serde(default)]
    pub outputs: IndexMap<String, MetafileOutput>,
}

impl Metafile {
    /// Parse a metafile from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MetafileError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl FromStr for Metafile {
    type Err = MetafileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// One source file that took part in the build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetafileInput {
    pub bytes: u64,
    #[serde(default)]
    pub imports: Vec<InputImport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ModuleFormat>,
}

/// An import statement found in a source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputImport {
    pub path: String,
    pub kind: ImportKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

/// Module system a source file was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    Esm,
    Cjs,
}

/// One file written by the build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafileOutput {
    pub bytes: u64,
    /// Source files that contributed code to this output, keyed by path
    #[serde(default)]
    pub inputs: IndexMap<String, OutputInput>,
    #[serde(default)]
    pub imports: Vec<OutputImport>,
    #[serde(default)]
    pub exports: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_bundle: Option<String>,
}

impl MetafileOutput {
    /// Source maps are emitted alongside code but are not part of the report.
    pub fn is_source_map(path: &str) -> bool {
        path.ends_with(".map")
    }
}

/// Contribution of one source file to an output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputInput {
    pub bytes_in_output: u64,
}

/// A reference from an output to another output or to an external module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputImport {
    pub path: String,
    pub kind: ImportKind,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

/// How one file refers to another.
///
/// Unrecognized kinds are kept verbatim in [`ImportKind::Other`] rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImportKind {
    EntryPoint,
    ImportStatement,
    RequireCall,
    DynamicImport,
    RequireResolve,
    ImportRule,
    ComposesFrom,
    UrlToken,
    Other(String),
}

impl ImportKind {
    pub fn as_str(&self) -> &str {
        match self {
            ImportKind::EntryPoint => "entry-point",
            ImportKind::ImportStatement => "import-statement",
            ImportKind::RequireCall => "require-call",
            ImportKind::DynamicImport => "dynamic-import",
            ImportKind::RequireResolve => "require-resolve",
            ImportKind::ImportRule => "import-rule",
            ImportKind::ComposesFrom => "composes-from",
            ImportKind::UrlToken => "url-token",
            ImportKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ImportKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "entry-point" => ImportKind::EntryPoint,
            "import-statement" => ImportKind::ImportStatement,
            "require-call" => ImportKind::RequireCall,
            "dynamic-import" => ImportKind::DynamicImport,
            "require-resolve" => ImportKind::RequireResolve,
            "import-rule" => ImportKind::ImportRule,
            "composes-from" => ImportKind::ComposesFrom,
            "url-token" => ImportKind::UrlToken,
            _ => ImportKind::Other(kind),
        }
    }
}

impl From<&str> for ImportKind {
    fn from(kind: &str) -> Self {
        ImportKind::from(kind.to_string())
    }
}

impl From<ImportKind> for String {
    fn from(kind: ImportKind) -> Self {
        match kind {
            ImportKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
