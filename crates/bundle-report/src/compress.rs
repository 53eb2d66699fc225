//! Gzip size estimation for emitted assets.

use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Extensions whose content is worth reporting a compressed size for.
///
/// Everything else (images, fonts, archives) is assumed to be compressed
/// already or binary.
pub const COMPRESSIBLE_EXTENSIONS: &[&str] =
    &["css", "html", "json", "js", "mjs", "svg", "txt", "xml", "xhtml"];

/// Whether `file_name` has one of the [`COMPRESSIBLE_EXTENSIONS`].
///
/// The match is case-sensitive.
pub fn is_compressible(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPRESSIBLE_EXTENSIONS.contains(&ext))
}

/// Gzip-compressed size of `content`, or `None` when `file_name` is not a
/// compressible type.
///
/// Uses the default gzip compression level, so the result is deterministic
/// for identical input. Empty content still reports the gzip header and
/// trailer overhead.
pub fn estimate_gzip_size(file_name: &str, content: &[u8]) -> Option<u64> {
    if !is_compressible(file_name) {
        return None;
    }

    match compress_gzip(content) {
        Ok(compressed) => Some(compressed.len() as u64),
        Err(err) => {
            tracing::warn!(file = file_name, error = %err, "gzip estimation failed");
            None
        }
    }
}

fn compress_gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
