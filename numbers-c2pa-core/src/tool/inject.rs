//! Manifest injection through c2patool.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::c2patool::C2paTool;
use super::mime::extension_for_mime;
use super::scratch_dir;
use crate::credentials::SigningCredentials;
use crate::error::Result;
use crate::manifest::Manifest;

const MANIFEST_FILE: &str = "manifest.json";

/// Options for a signing run.
///
/// `force_overwrite` defaults to `true`.
#[derive(Clone)]
pub struct InjectOptions {
    /// PEM private key, exported to the tool as `C2PA_PRIVATE_KEY`
    pub private_key: Option<Zeroizing<String>>,
    /// PEM certificate chain, exported to the tool as `C2PA_SIGN_CERT`
    pub sign_cert: Option<String>,
    /// Let the tool replace an existing output file
    pub force_overwrite: bool,
    /// Parent asset recorded as ingredient (file injection only)
    pub parent_path: Option<PathBuf>,
    /// Thumbnail to download and embed (file injection only)
    pub thumbnail_url: Option<String>,
}

impl Default for InjectOptions {
    fn default() -> Self {
        Self {
            private_key: None,
            sign_cert: None,
            force_overwrite: true,
            parent_path: None,
            thumbnail_url: None,
        }
    }
}

impl fmt::Debug for InjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectOptions")
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("sign_cert", &self.sign_cert.is_some())
            .field("force_overwrite", &self.force_overwrite)
            .field("parent_path", &self.parent_path)
            .field("thumbnail_url", &self.thumbnail_url)
            .finish()
    }
}

impl InjectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_private_key(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(Zeroizing::new(pem.into()));
        self
    }

    pub fn with_sign_cert(mut self, pem: impl Into<String>) -> Self {
        self.sign_cert = Some(pem.into());
        self
    }

    /// Use both halves of a loaded credential pair.
    pub fn with_credentials(mut self, credentials: &SigningCredentials) -> Self {
        self.private_key = Some(credentials.private_key().clone());
        self.sign_cert = Some(credentials.sign_cert().to_string());
        self
    }

    pub fn with_force_overwrite(mut self, force: bool) -> Self {
        self.force_overwrite = force;
        self
    }

    pub fn with_parent_path(mut self, parent: impl Into<PathBuf>) -> Self {
        self.parent_path = Some(parent.into());
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

impl C2paTool {
    /// Sign in-memory asset bytes and return the signed bytes.
    ///
    /// The asset and manifest are staged in a temporary directory that is
    /// removed when this call returns. `parent_path` and `thumbnail_url`
    /// only apply to [`C2paTool::inject_file`] and are ignored here.
    pub fn inject(
        &self,
        asset_bytes: &[u8],
        mime_type: &str,
        manifest: &Manifest,
        options: &InjectOptions,
    ) -> Result<Vec<u8>> {
        let extension = extension_for_mime(mime_type)?;
        let scratch = scratch_dir()?;

        let manifest_path = write_manifest(scratch.path(), manifest)?;
        let asset_path = scratch.path().join(format!("asset.{extension}"));
        fs::write(&asset_path, asset_bytes)?;
        let output_path = scratch.path().join(format!("asset-c2pa.{extension}"));

        let options = InjectOptions {
            parent_path: None,
            thumbnail_url: None,
            ..options.clone()
        };
        self.run_sign(&asset_path, &manifest_path, &output_path, &options)?;

        let signed = fs::read(&output_path)?;
        info!(
            mime_type,
            input_bytes = asset_bytes.len(),
            output_bytes = signed.len(),
            "Injected C2PA manifest"
        );
        Ok(signed)
    }

    /// Sign an asset file, writing the signed copy to `output_path`.
    pub fn inject_file(
        &self,
        asset_path: &Path,
        output_path: &Path,
        manifest: &Manifest,
        options: &InjectOptions,
    ) -> Result<()> {
        let scratch = scratch_dir()?;

        let manifest_path = match &options.thumbnail_url {
            Some(url) => {
                let thumbnail = self.stage_thumbnail(url, scratch.path())?;
                write_manifest(scratch.path(), &manifest.with_thumbnail(thumbnail))?
            }
            None => write_manifest(scratch.path(), manifest)?,
        };

        self.run_sign(asset_path, &manifest_path, output_path, options)?;

        info!(
            asset = %asset_path.display(),
            output = %output_path.display(),
            "Injected C2PA manifest"
        );
        Ok(())
    }

    #[cfg(feature = "thumbnail")]
    fn stage_thumbnail(&self, url: &str, dir: &Path) -> Result<crate::manifest::Thumbnail> {
        super::thumbnail::ThumbnailFetcher::new(self.config())?.fetch_into(url, dir)
    }

    #[cfg(not(feature = "thumbnail"))]
    fn stage_thumbnail(&self, _url: &str, _dir: &Path) -> Result<crate::manifest::Thumbnail> {
        Err(crate::error::NumbersC2paError::ThumbnailFetch(
            "built without the `thumbnail` feature".to_string(),
        ))
    }
}

fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    fs::write(&path, manifest.to_json()?)?;
    debug!(path = %path.display(), "Staged manifest");
    Ok(path)
}

/// Sign in-memory bytes with a tool configured from the environment.
pub fn inject(
    asset_bytes: &[u8],
    mime_type: &str,
    manifest: &Manifest,
    options: &InjectOptions,
) -> Result<Vec<u8>> {
    C2paTool::from_env().inject(asset_bytes, mime_type, manifest, options)
}

/// Sign a file with a tool configured from the environment.
pub fn inject_file(
    asset_path: &Path,
    output_path: &Path,
    manifest: &Manifest,
    options: &InjectOptions,
) -> Result<()> {
    C2paTool::from_env().inject_file(asset_path, output_path, manifest, options)
}
