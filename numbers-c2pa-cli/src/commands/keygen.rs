//! Keygen command implementation.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use numbers_c2pa_core::credentials::{DEFAULT_CERT_FILE, DEFAULT_KEY_FILE};
use numbers_c2pa_core::{
    create_es256_private_key_file, create_self_signed_certificate, generate_es256_private_key,
};
use tracing::info;

#[derive(Args)]
pub struct KeygenArgs {
    /// Where to write the ES256 private key
    #[arg(long, value_name = "PATH", default_value = DEFAULT_KEY_FILE)]
    key: PathBuf,

    /// Where to write the self-signed certificate
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CERT_FILE)]
    cert: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    force: bool,
}

fn refuse_overwrite(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path.display()),
        )
        .into());
    }
    Ok(())
}

/// Execute the keygen command.
pub fn execute(args: KeygenArgs, quiet: bool) -> Result<()> {
    refuse_overwrite(&args.key, args.force)?;
    refuse_overwrite(&args.cert, args.force)?;

    let key_pem = generate_es256_private_key().context("Failed to generate private key")?;
    create_es256_private_key_file(Some(key_pem.as_slice()), &args.key)
        .with_context(|| format!("Failed to write private key: {}", args.key.display()))?;
    create_self_signed_certificate(&key_pem, &args.cert)
        .with_context(|| format!("Failed to write certificate: {}", args.cert.display()))?;

    info!(key = %args.key.display(), cert = %args.cert.display(), "Signing material generated");

    if !quiet {
        println!();
        println!("{}", "Signing material generated!".green().bold());
        println!();
        println!("   {} {}", "Private key:".dimmed(), args.key.display());
        println!("   {} {}", "Certificate:".dimmed(), args.cert.display());
        println!();
        println!(
            "   {}",
            "Self-signed certificates are not trusted by C2PA validators. Use for testing only."
                .yellow()
        );
    }

    Ok(())
}
