//! Manifest store reading through c2patool.

use std::fs;
use std::path::Path;

use tracing::info;

use super::c2patool::C2paTool;
use super::mime::extension_for_mime;
use super::scratch_dir;
use crate::error::Result;

impl C2paTool {
    /// Read the manifest report of in-memory signed asset bytes.
    ///
    /// Fails with [`NoClaimFound`](crate::NumbersC2paError::NoClaimFound)
    /// when the asset carries no manifest.
    pub fn read(&self, asset_bytes: &[u8], mime_type: &str) -> Result<serde_json::Value> {
        let extension = extension_for_mime(mime_type)?;
        let scratch = scratch_dir()?;

        let asset_path = scratch.path().join(format!("asset-c2pa.{extension}"));
        fs::write(&asset_path, asset_bytes)?;

        let report = self.run_read(&asset_path)?;
        info!(mime_type, bytes = asset_bytes.len(), "Read C2PA manifest store");
        Ok(report)
    }

    /// Read the manifest report of a signed asset file in place.
    pub fn read_file(&self, path: &Path) -> Result<serde_json::Value> {
        let report = self.run_read(path)?;
        info!(path = %path.display(), "Read C2PA manifest store");
        Ok(report)
    }
}

/// Read in-memory bytes with a tool configured from the environment.
pub fn read_c2pa(asset_bytes: &[u8], mime_type: &str) -> Result<serde_json::Value> {
    C2paTool::from_env().read(asset_bytes, mime_type)
}

/// Read a file with a tool configured from the environment.
pub fn read_c2pa_file(path: &Path) -> Result<serde_json::Value> {
    C2paTool::from_env().read_file(path)
}
