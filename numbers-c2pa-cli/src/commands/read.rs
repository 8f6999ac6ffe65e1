//! Read command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use numbers_c2pa_core::C2paTool;
use tracing::info;

use crate::utils::require_input;

/// Execute the read command.
///
/// Prints the tool's manifest report as pretty JSON on stdout.
pub fn execute(tool: &C2paTool, file: PathBuf) -> Result<()> {
    require_input(&file)?;

    let report = tool
        .read_file(&file)
        .with_context(|| format!("Failed to read C2PA manifest from: {}", file.display()))?;

    info!(
        file = %file.display(),
        active_manifest = report["active_manifest"].as_str().unwrap_or("none"),
        "Read manifest report"
    );

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");

    Ok(())
}
