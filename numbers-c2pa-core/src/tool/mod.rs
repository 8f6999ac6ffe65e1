//! c2patool adapter
//!
//! Stages assets and manifests in scoped temporary directories, runs the
//! external `c2patool` binary and turns its exit status, stderr and JSON
//! stdout into typed results.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use numbers_c2pa_core::tool::{C2paTool, InjectOptions, ToolConfig};
//! use numbers_c2pa_core::ManifestBuilder;
//!
//! # fn example() -> numbers_c2pa_core::Result<()> {
//! let manifest = ManifestBuilder::new("bafk...", "Tester", "0xabc", "57ae67eb").build()?;
//! let tool = C2paTool::new(ToolConfig::from_env());
//!
//! tool.inject_file(
//!     Path::new("photo.jpg"),
//!     Path::new("photo-c2pa.jpg"),
//!     &manifest,
//!     &InjectOptions::new().with_parent_path("photo.jpg"),
//! )?;
//! let report = tool.read_file(Path::new("photo-c2pa.jpg"))?;
//! println!("{}", report["active_manifest"]);
//! # Ok(())
//! # }
//! ```

mod c2patool;
mod config;
mod inject;
mod mime;
mod read;
#[cfg(feature = "thumbnail")]
mod thumbnail;

use tempfile::TempDir;

use crate::error::Result;

pub use c2patool::{
    classify_read_failure, C2paTool, NO_CLAIM_FOUND_MARKER, PRIVATE_KEY_ENV, SIGN_CERT_ENV,
};
pub use config::{
    ToolConfig, MAX_THUMBNAIL_RETRIES, MAX_THUMBNAIL_TIMEOUT, THUMBNAIL_RETRIES_ENV,
    THUMBNAIL_TIMEOUT_ENV, TOOL_PATH_ENV,
};
pub use inject::{inject, inject_file, InjectOptions};
pub use mime::extension_for_mime;
pub use read::{read_c2pa, read_c2pa_file};
#[cfg(feature = "thumbnail")]
pub use thumbnail::{ThumbnailFetcher, THUMBNAIL_FILE, THUMBNAIL_FORMAT};

/// Prefix of every scratch directory created by the adapter
pub const SCRATCH_PREFIX: &str = "numbers-c2pa-";

/// Per-call scratch directory, removed when dropped.
fn scratch_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?)
}
