//! Manifest command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use colored::Colorize;
use numbers_c2pa_core::{AssetTreeLink, GeoFormat, ManifestBuilder};
use tracing::info;

use crate::exit_codes::UsageError;
use crate::utils::sha256_file;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GeoFormatArg {
    /// Signed decimal degrees
    Decimal,
    /// XMP GPSCoordinate form, e.g. 25,2.037840N
    DegreesMinutes,
}

impl From<GeoFormatArg> for GeoFormat {
    fn from(arg: GeoFormatArg) -> Self {
        match arg {
            GeoFormatArg::Decimal => GeoFormat::Decimal,
            GeoFormatArg::DegreesMinutes => GeoFormat::DegreesMinutes,
        }
    }
}

#[derive(Args)]
pub struct ManifestArgs {
    /// Numbers Protocol asset id (CID)
    #[arg(long)]
    nid: String,

    /// Hex SHA-256 of the asset
    #[arg(long, required_unless_present = "asset")]
    asset_hash: Option<String>,

    /// Hash this file instead of passing --asset-hash
    #[arg(long, value_name = "FILE", conflicts_with = "asset_hash")]
    asset: Option<PathBuf>,

    /// Creator name recorded as the CreativeWork author
    #[arg(long, default_value = "")]
    creator_name: String,

    /// Creator public key or wallet address
    #[arg(long, default_value = "")]
    creator_public_key: String,

    /// Creation time (RFC 3339)
    #[arg(long)]
    date_created: Option<DateTime<Utc>>,

    /// Capture time (RFC 3339)
    #[arg(long)]
    date_captured: Option<DateTime<Utc>>,

    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Coordinate format for the EXIF assertion
    #[arg(long, value_enum, default_value_t = GeoFormatArg::Decimal)]
    geo_format: GeoFormatArg,

    /// IPTC digital source type (term or full URI)
    #[arg(long)]
    digital_source_type: Option<String>,

    /// Software agent that generated the asset
    #[arg(long)]
    generated_by: Option<String>,

    /// Claim generator name
    #[arg(long)]
    claim_generator_name: Option<String>,

    /// Signing algorithm
    #[arg(long)]
    alg: Option<String>,

    /// Timestamp authority URL
    #[arg(long)]
    ta_url: Option<String>,

    /// Vendor prefix
    #[arg(long)]
    vendor: Option<String>,

    /// Asset tree CID
    #[arg(long, requires_all = ["asset_tree_sha256", "asset_tree_signature", "committer"])]
    asset_tree_cid: Option<String>,

    /// Asset tree SHA-256
    #[arg(long, requires = "asset_tree_cid")]
    asset_tree_sha256: Option<String>,

    /// Asset tree signature
    #[arg(long, requires = "asset_tree_cid")]
    asset_tree_signature: Option<String>,

    /// Committer of the asset tree
    #[arg(long, requires = "asset_tree_cid")]
    committer: Option<String>,

    /// Write the manifest here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl ManifestArgs {
    fn builder(self, asset_hash: String) -> ManifestBuilder {
        let mut builder = ManifestBuilder::new(
            self.nid,
            self.creator_name,
            self.creator_public_key,
            asset_hash,
        )
        .with_geo_format(self.geo_format.into());

        if let Some(date) = self.date_created {
            builder = builder.with_date_created(date);
        }
        if let Some(date) = self.date_captured {
            builder = builder.with_date_captured(date);
        }
        if let Some(latitude) = self.latitude {
            builder = builder.with_latitude(latitude);
        }
        if let Some(longitude) = self.longitude {
            builder = builder.with_longitude(longitude);
        }
        if let Some(source_type) = self.digital_source_type {
            builder = builder.with_digital_source_type(source_type);
        }
        if let Some(agent) = self.generated_by {
            builder = builder.with_generated_by(agent);
        }
        if let Some(name) = self.claim_generator_name {
            builder = builder.with_claim_generator_name(name);
        }
        if let Some(alg) = self.alg {
            builder = builder.with_alg(alg);
        }
        if let Some(ta_url) = self.ta_url {
            builder = builder.with_ta_url(ta_url);
        }
        if let Some(vendor) = self.vendor {
            builder = builder.with_vendor(vendor);
        }
        if let (Some(cid), Some(sha256), Some(signature), Some(committer)) = (
            self.asset_tree_cid,
            self.asset_tree_sha256,
            self.asset_tree_signature,
            self.committer,
        ) {
            builder = builder.with_asset_tree(AssetTreeLink {
                cid,
                sha256,
                signature,
                committer,
            });
        }
        builder
    }
}

/// Execute the manifest command.
pub fn execute(mut args: ManifestArgs, quiet: bool) -> Result<()> {
    let asset_hash = match args.asset_hash.take() {
        Some(hash) => hash,
        None => {
            let asset = args
                .asset
                .as_deref()
                .ok_or_else(|| UsageError("Either --asset-hash or --asset is required".into()))?;
            sha256_file(asset)?
        }
    };

    let output = args.output.take();
    let manifest = args
        .builder(asset_hash)
        .build()
        .context("Failed to build manifest")?;
    let json = manifest
        .to_json_pretty()
        .context("Failed to serialize manifest")?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
            info!(path = %path.display(), assertions = manifest.assertions.len(), "Manifest saved");

            if !quiet {
                println!();
                println!("{}", "Manifest created!".green().bold());
                println!();
                println!("   {} {}", "Manifest file:".dimmed(), path.display());
                println!(
                    "   {} {}",
                    "Claim generator:".dimmed(),
                    manifest.claim_generator
                );
                println!(
                    "   {} {}",
                    "Assertions:".dimmed(),
                    manifest
                        .assertions
                        .iter()
                        .map(|a| a.label.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}
