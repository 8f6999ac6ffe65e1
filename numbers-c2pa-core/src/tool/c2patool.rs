//! Subprocess plumbing for c2patool.
//!
//! The tool is executed directly (never through a shell). Signing material
//! is passed only through its environment.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};
use std::time::Instant;

use tracing::{debug, info, warn};

use super::config::ToolConfig;
use super::inject::InjectOptions;
use crate::error::{NumbersC2paError, Result};

/// Environment variable c2patool reads the PEM private key from
pub const PRIVATE_KEY_ENV: &str = "C2PA_PRIVATE_KEY";

/// Environment variable c2patool reads the PEM certificate chain from
pub const SIGN_CERT_ENV: &str = "C2PA_SIGN_CERT";

/// stderr marker for an asset without a manifest store
pub const NO_CLAIM_FOUND_MARKER: &str = "No claim found";

/// Handle on the external c2patool executable.
#[derive(Debug, Clone, Default)]
pub struct C2paTool {
    config: ToolConfig,
}

impl C2paTool {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Use [`ToolConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(ToolConfig::from_env())
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.config.program);
        command.args(&self.config.program_args);
        command
    }

    /// Sign `asset` with `manifest`, writing the result to `output`.
    pub(crate) fn run_sign(
        &self,
        asset: &Path,
        manifest: &Path,
        output: &Path,
        options: &InjectOptions,
    ) -> Result<()> {
        let mut command = self.command();
        command
            .arg(asset)
            .arg("-m")
            .arg(manifest)
            .arg("-o")
            .arg(output);
        if let Some(parent) = &options.parent_path {
            command.arg("-p").arg(parent);
        }
        if options.force_overwrite {
            command.arg("-f");
        }
        if let Some(key) = &options.private_key {
            command.env(PRIVATE_KEY_ENV, key.as_str());
        }
        if let Some(cert) = &options.sign_cert {
            command.env(SIGN_CERT_ENV, cert);
        }

        debug!(
            asset = %asset.display(),
            output = %output.display(),
            parent = options.parent_path.is_some(),
            force = options.force_overwrite,
            has_key = options.private_key.is_some(),
            has_cert = options.sign_cert.is_some(),
            "Invoking c2patool to sign asset"
        );

        let result = self.run(&mut command)?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
            warn!(code = ?result.status.code(), "c2patool signing failed");
            return Err(NumbersC2paError::Tool { stderr });
        }

        Ok(())
    }

    /// Read the manifest store of `asset` and parse the tool's JSON report.
    pub(crate) fn run_read(&self, asset: &Path) -> Result<serde_json::Value> {
        let mut command = self.command();
        command.arg(asset);

        debug!(asset = %asset.display(), "Invoking c2patool to read asset");

        let output = self.run(&mut command)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let err = classify_read_failure(stderr);
            warn!(code = ?output.status.code(), error = %err, "c2patool read failed");
            return Err(err);
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }

    fn run(&self, command: &mut Command) -> Result<Output> {
        let start = Instant::now();
        let output = command
            .output()
            .map_err(|source| NumbersC2paError::ToolSpawn {
                program: display_program(&self.config.program),
                source,
            })?;

        info!(
            code = ?output.status.code(),
            latency_ms = start.elapsed().as_millis() as u64,
            "c2patool exited"
        );
        Ok(output)
    }
}

/// Map the stderr of a failed read to an error kind.
pub fn classify_read_failure(stderr: String) -> NumbersC2paError {
    if stderr.contains(NO_CLAIM_FOUND_MARKER) {
        NumbersC2paError::NoClaimFound
    } else {
        NumbersC2paError::Tool { stderr }
    }
}

fn display_program(program: &OsStr) -> String {
    program.to_string_lossy().into_owned()
}
