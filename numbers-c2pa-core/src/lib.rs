//! Numbers C2PA - C2PA manifest construction and c2patool integration
//!
//! This crate builds C2PA manifest definitions from typed provenance inputs
//! and hands the signing, embedding and reading of manifests to the external
//! `c2patool` binary. It never parses or writes the C2PA binary format itself.
//!
//! # Features
//!
//! - Numbers Protocol manifest builder (CreativeWork, actions, integrity,
//!   EXIF and asset-tree assertions)
//! - Free-form manifests with caller-supplied assertions
//! - Scoped temp-file staging and c2patool invocation
//! - Typed read errors (`NoClaimFound` vs. tool failure with stderr)
//! - ES256 key and self-signed certificate generation for development
//! - Optional thumbnail download (`thumbnail` feature)
//!
//! # Example
//!
//! ```no_run
//! use numbers_c2pa_core::{inject, read_c2pa, InjectOptions, ManifestBuilder};
//!
//! # fn example(photo: Vec<u8>) -> numbers_c2pa_core::Result<()> {
//! let manifest = ManifestBuilder::new(
//!     "bafkreicxvzt6xwmu6rrghe4bwixup5aqrw5abcskg5mpt2gnt2h7buwwzm",
//!     "Tester",
//!     "0x2FBfE8F2bA00B255e60c220755040B597d09aFFa",
//!     "57ae67ebd994f462639381b22f47f4108dba008a4a3758f9e8cd9e8ff0d2d6cb",
//! )
//! .with_location(25.033964, 121.564468)
//! .build()?;
//!
//! let options = InjectOptions::new()
//!     .with_private_key(std::fs::read_to_string("es256_private.key")?)
//!     .with_sign_cert(std::fs::read_to_string("es256_certs.pem")?);
//! let signed = inject(&photo, "image/png", &manifest, &options)?;
//!
//! let report = read_c2pa(&signed, "image/png")?;
//! println!("{report:#}");
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod manifest;
pub mod tool;

// Re-export main types for convenience
pub use credentials::{
    create_es256_private_key_file, create_self_signed_certificate, generate_es256_private_key,
    self_signed_certificate, SigningCredentials,
};
pub use error::{NumbersC2paError, Result};
pub use manifest::{
    AssetTreeLink, Assertion, CustomManifestBuilder, GeoFormat, Manifest, ManifestBuilder,
    Thumbnail,
};
pub use tool::{
    inject, inject_file, read_c2pa, read_c2pa_file, C2paTool, InjectOptions, ToolConfig,
};
