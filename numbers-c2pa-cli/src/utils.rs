//! Common utility functions shared across CLI commands.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Build the signed output path from the original file path.
///
/// Transforms `photo.jpg` into `photo-c2pa.jpg`.
pub fn default_output_path(file: &Path) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "asset".to_string());
    let name = match file.extension() {
        Some(ext) => format!("{}-c2pa.{}", stem, ext.to_string_lossy()),
        None => format!("{}-c2pa", stem),
    };
    file.with_file_name(name)
}

/// Fail early with an input error when `path` does not exist.
pub fn require_input(path: &Path) -> Result<()> {
    std::fs::metadata(path)
        .map(|_| ())
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Hex SHA-256 of a file's content, streamed.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut hasher = Sha256::new();
    let bytes = io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let hash = hex::encode(hasher.finalize());
    debug!(path = %path.display(), bytes, hash = %hash, "Hashed asset");
    Ok(hash)
}
