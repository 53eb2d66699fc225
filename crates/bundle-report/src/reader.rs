//! Access to emitted build outputs on disk.
//!
//! The transformer only needs one operation, reading a whole file, and treats
//! any failure as "size unknown". Keeping it behind [`AssetReader`] lets the
//! transform run against in-memory fixtures and keeps `std::fs` out of the
//! rest of the crate.

// FsAssetReader is the one place that touches the filesystem directly
#![allow(clippy::disallowed_methods)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Source of emitted file contents.
pub trait AssetReader: Send + Sync + std::fmt::Debug {
    /// Read the full contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read the file, mapping every failure to `None`.
    fn read_optional(&self, path: &Path) -> Option<Vec<u8>> {
        match self.read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "output not readable, gzip size unknown");
                None
            }
        }
    }
}

/// Reads from the native filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetReader;

impl AssetReader for FsAssetReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// In-memory files, keyed by full path.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetReader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryAssetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl AssetReader for MemoryAssetReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }
}
