//! C2PA manifest construction
//!
//! Pure data transformation: typed inputs in, a serializable [`Manifest`]
//! out. Nothing here touches the filesystem or the signing tool.
//!
//! # Example
//!
//! ```
//! use numbers_c2pa_core::manifest::{CustomManifestBuilder, Manifest};
//!
//! let manifest = CustomManifestBuilder::new()
//!     .with_title("Harbor at dusk")
//!     .with_author_name("Example News")
//!     .build()
//!     .unwrap();
//!
//! let json = manifest.to_json().unwrap();
//! assert_eq!(Manifest::from_json(&json).unwrap(), manifest);
//! ```

mod assertion;
mod builder;
mod custom;
mod definition;
pub mod format;

pub use assertion::{
    Action, ActionParameters, Actions, AssetTree, Assertion, Author, CreativeWork, Exif,
    ExifContext, IngredientRef, Integrity, SoftwareAgent, ACTIONS_LABEL, ACTIONS_V2_LABEL,
    ACTION_OPENED, ASSET_PROFILE_URL, ASSET_TREE_LABEL, CREATIVE_WORK_LABEL, EXIF_LABEL,
    INGREDIENT_URL, INTEGRITY_LABEL,
};
pub use builder::{AssetTreeLink, ManifestBuilder};
pub use custom::{CustomManifestBuilder, DEFAULT_CLAIM_GENERATOR};
pub use definition::{
    ClaimGeneratorInfo, Manifest, Thumbnail, DEFAULT_ALG, DEFAULT_CLAIM_GENERATOR_NAME,
    DEFAULT_TA_URL, DEFAULT_VENDOR,
};
pub use format::GeoFormat;
