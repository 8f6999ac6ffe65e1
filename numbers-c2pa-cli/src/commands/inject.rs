//! Inject command implementation.
//!
//! Signs a media file with a manifest by handing both to c2patool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use numbers_c2pa_core::{C2paTool, InjectOptions, Manifest, SigningCredentials};
use tracing::info;

use crate::exit_codes::UsageError;
use crate::utils::{default_output_path, require_input};

#[derive(Args)]
pub struct InjectArgs {
    /// Path to the file to sign
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output path (defaults to <FILE stem>-c2pa.<ext>)
    #[arg(short, long, value_name = "OUT")]
    output: Option<PathBuf>,

    /// Manifest JSON, e.g. from `numbers-c2pa manifest -o`
    #[arg(short, long, value_name = "JSON")]
    manifest: PathBuf,

    /// Parent asset to record as ingredient
    #[arg(short, long, value_name = "FILE")]
    parent: Option<PathBuf>,

    /// PEM private key (otherwise C2PA_PRIVATE_KEY is inherited)
    #[arg(long, value_name = "PEM")]
    key: Option<PathBuf>,

    /// PEM certificate chain (otherwise C2PA_SIGN_CERT is inherited)
    #[arg(long, value_name = "PEM")]
    cert: Option<PathBuf>,

    /// Download this image and embed it as the thumbnail
    #[arg(long, value_name = "URL")]
    thumbnail_url: Option<String>,

    /// Fail instead of overwriting an existing output file
    #[arg(long)]
    no_force: bool,

    /// Show what would be done without running c2patool
    #[arg(long)]
    dry_run: bool,
}

/// Execute the inject command.
pub fn execute(tool: &C2paTool, args: InjectArgs, quiet: bool) -> Result<()> {
    require_input(&args.file)?;

    let manifest_json = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("Failed to read manifest: {}", args.manifest.display()))?;
    let manifest = Manifest::from_json(&manifest_json)
        .with_context(|| format!("Failed to parse manifest: {}", args.manifest.display()))?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.file));

    if args.key.is_some() != args.cert.is_some() {
        return Err(UsageError(
            "Both --key and --cert must be provided together, or neither (use env vars)".into(),
        )
        .into());
    }

    if args.dry_run {
        println!("{}", "[DRY RUN] Would perform the following:".cyan().bold());
        println!();
        println!("   {} {}", "Input file:".dimmed(), args.file.display());
        println!("   {} {}", "Manifest:".dimmed(), args.manifest.display());
        println!("   {} {}", "Output file:".dimmed(), output_path.display());
        if let Some(parent) = &args.parent {
            println!("   {} {}", "Parent:".dimmed(), parent.display());
        }
        println!(
            "   {} {}",
            "Signing key:".dimmed(),
            args.key
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "from C2PA_PRIVATE_KEY env".to_string())
        );
        println!(
            "   {} {}",
            "Certificate:".dimmed(),
            args.cert
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "from C2PA_SIGN_CERT env".to_string())
        );
        if let Some(url) = &args.thumbnail_url {
            println!("   {} {}", "Thumbnail:".dimmed(), url);
        }
        println!("   {} {}", "Overwrite:".dimmed(), !args.no_force);
        return Ok(());
    }

    let mut options = InjectOptions::new().with_force_overwrite(!args.no_force);
    if let (Some(key), Some(cert)) = (&args.key, &args.cert) {
        let credentials = SigningCredentials::from_files(key, cert)
            .context("Failed to load signing credentials from files")?;
        options = options.with_credentials(&credentials);
    }
    if let Some(parent) = &args.parent {
        require_input(parent)?;
        options = options.with_parent_path(parent);
    }
    if let Some(url) = args.thumbnail_url {
        options = options.with_thumbnail_url(url);
    }

    tool.inject_file(&args.file, &output_path, &manifest, &options)
        .context("Failed to inject C2PA manifest")?;

    info!(output = %output_path.display(), "C2PA manifest injected");

    if !quiet {
        println!();
        println!("{}", "C2PA manifest injected!".green().bold());
        println!();
        println!("   {} {}", "Output file:".dimmed(), output_path.display());
        println!(
            "   {} {}",
            "Assertions:".dimmed(),
            manifest.assertions.len()
        );
        println!(
            "   {}",
            format!("Verify with: numbers-c2pa read {}", output_path.display()).dimmed()
        );
    }

    Ok(())
}
