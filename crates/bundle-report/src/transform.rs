//! Metafile to bundle report mapping.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::compress::estimate_gzip_size;
use crate::metafile::{ImportKind, Metafile, MetafileOutput};
use crate::normalize::normalize;
use crate::payload::{
    Asset, BundleReport, BundlerInfo, Chunk, Module, ProducerInfo, SCHEMA_VERSION,
};
use crate::reader::{AssetReader, FsAssetReader};

/// Settings for one [`transform`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Name the bundle is tracked under, e.g. `"web-app"`
    pub bundle_name: String,
    /// Directory holding the emitted files; enables gzip sizes
    pub output_dir: Option<PathBuf>,
    pub bundler: Option<BundlerInfo>,
    /// Epoch milliseconds; defaults to the time of the call
    pub built_at: Option<i64>,
    /// Build duration in milliseconds
    pub duration: Option<u64>,
}

impl TransformOptions {
    pub fn new(bundle_name: impl Into<String>) -> Self {
        Self {
            bundle_name: bundle_name.into(),
            ..Self::default()
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn bundler(mut self, bundler: BundlerInfo) -> Self {
        self.bundler = Some(bundler);
        self
    }

    pub fn built_at(mut self, epoch_ms: i64) -> Self {
        self.built_at = Some(epoch_ms);
        self
    }

    pub fn duration(mut self, ms: u64) -> Self {
        self.duration = Some(ms);
        self
    }
}

/// Build a [`BundleReport`] from `metafile`, reading outputs from disk for
/// gzip sizes when [`TransformOptions::output_dir`] is set.
pub fn transform(metafile: &Metafile, options: &TransformOptions) -> BundleReport {
    transform_with(metafile, options, &FsAssetReader)
}

/// Like [`transform`], reading emitted files through `reader`.
///
/// Never fails. An output that cannot be read just has no gzip size.
pub fn transform_with(
    metafile: &Metafile,
    options: &TransformOptions,
    reader: &dyn AssetReader,
) -> BundleReport {
    let _span = tracing::debug_span!("transform", bundle = %options.bundle_name).entered();

    let mut assets = Vec::new();
    let mut chunks = Vec::new();
    // Source path -> unique ids of the chunks it is part of, in output order.
    let mut membership: HashMap<&str, Vec<String>> = HashMap::new();

    // Map files still take an ordinal so ids line up with the output order.
    for (ordinal, (path, output)) in metafile.outputs.iter().enumerate() {
        if MetafileOutput::is_source_map(path) {
            tracing::debug!(output = %path, "skipping source map");
            continue;
        }

        let unique_id = format!("{ordinal}-{path}");

        assets.push(Asset {
            name: path.clone(),
            byte_size: output.bytes,
            gzip_byte_size: gzip_size(path, options, reader),
            normalized_name: normalize(path),
        });

        for input in output.inputs.keys() {
            membership
                .entry(input.as_str())
                .or_default()
                .push(unique_id.clone());
        }

        let is_entry = output.entry_point.is_some();
        chunks.push(Chunk {
            id: path.clone(),
            unique_id,
            is_entry,
            is_initial: is_entry,
            names: vec![chunk_name(path, output)],
            files: vec![path.clone()],
            dynamic_import_targets: dynamic_imports(output),
        });
    }

    let modules: Vec<Module> = metafile
        .inputs
        .iter()
        .map(|(path, input)| Module {
            name: path.clone(),
            byte_size: input.bytes,
            member_of_chunk_unique_ids: membership.remove(path.as_str()).unwrap_or_default(),
        })
        .collect();

    tracing::debug!(
        assets = assets.len(),
        chunks = chunks.len(),
        modules = modules.len(),
        "metafile transformed"
    );

    BundleReport {
        schema_version: SCHEMA_VERSION.to_string(),
        bundle_name: options.bundle_name.clone(),
        bundler: options.bundler.clone(),
        built_at: options
            .built_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
        duration: options.duration,
        assets,
        chunks,
        modules,
        producer: ProducerInfo::current(),
    }
}

fn gzip_size(path: &str, options: &TransformOptions, reader: &dyn AssetReader) -> Option<u64> {
    let dir = options.output_dir.as_ref()?;
    let content = reader.read_optional(&dir.join(base_name(path)))?;
    estimate_gzip_size(path, &content)
}

fn dynamic_imports(output: &MetafileOutput) -> Vec<String> {
    output
        .imports
        .iter()
        .filter(|import| import.kind == ImportKind::DynamicImport && !import.external)
        .map(|import| import.path.clone())
        .collect()
}

/// Entry chunks are named after their entry point, others after the file.
fn chunk_name(path: &str, output: &MetafileOutput) -> String {
    let source = output.entry_point.as_deref().unwrap_or(path);
    strip_extension(base_name(source)).to_string()
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
