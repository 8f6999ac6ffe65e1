//! Assertion payloads understood by c2patool.
//!
//! Each assertion is a `{label, data, kind?}` block. The `data` trees are
//! built from the typed structs below so that optional fields drop out of
//! the JSON instead of being written as `null`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Label of the schema.org CreativeWork assertion
pub const CREATIVE_WORK_LABEL: &str = "stds.schema-org.CreativeWork";

/// Label of the action history assertion emitted by [`super::ManifestBuilder`]
pub const ACTIONS_V2_LABEL: &str = "c2pa.actions.v2";

/// Label of the caller-supplied action list in custom manifests
pub const ACTIONS_LABEL: &str = "c2pa.actions";

/// Label of the Numbers Protocol integrity binding
pub const INTEGRITY_LABEL: &str = "io.numbersprotocol.integrity";

/// Label of the EXIF block
pub const EXIF_LABEL: &str = "stds.exif";

/// Label of the optional asset-tree linkage
pub const ASSET_TREE_LABEL: &str = "io.numbersprotocol.asset-tree";

/// Action recorded for the asset this manifest is built for
pub const ACTION_OPENED: &str = "c2pa.opened";

/// JUMBF URI of the ingredient referenced by the opened action
pub const INGREDIENT_URL: &str = "self#jumbf=c2pa.assertions/c2pa.ingredient";

/// Base of the public asset profile page, followed by the nid
pub const ASSET_PROFILE_URL: &str = "https://verify.numbersprotocol.io/asset-profile/";

const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// One labeled data block of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assertion {
    pub label: String,
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Assertion {
    /// Create an assertion from any serializable payload.
    pub fn new(label: impl Into<String>, data: &impl Serialize) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            data: serde_json::to_value(data)?,
            kind: None,
        })
    }

    /// Set the payload kind (c2patool expects `"Json"` for EXIF blocks).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// A schema.org author entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "@type")]
    pub author_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Author {
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            author_type: "Person".to_string(),
            credential: None,
            identifier: None,
            name: Some(name.into()),
        }
    }
}

/// `stds.schema-org.CreativeWork` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeWork {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub work_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Author>>,
    #[serde(
        rename = "dateCreated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<String>,
    #[serde(
        rename = "locationCreated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_created: Option<String>,
}

impl CreativeWork {
    /// An empty CreativeWork with only the schema.org context and type set.
    pub fn new() -> Self {
        Self {
            context: SCHEMA_ORG_CONTEXT.to_string(),
            work_type: "CreativeWork".to_string(),
            url: None,
            identifier: None,
            author: None,
            date_created: None,
            location_created: None,
        }
    }

    /// A CreativeWork identified by a Numbers Protocol nid.
    pub fn for_nid(nid: &str) -> Self {
        Self {
            url: Some(format!("{ASSET_PROFILE_URL}{nid}")),
            identifier: Some(nid.to_string()),
            ..Self::new()
        }
    }
}

impl Default for CreativeWork {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashed reference to an ingredient inside the manifest store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRef {
    pub url: String,
    pub alg: String,
    /// Base64 of the raw digest bytes
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionParameters {
    pub ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareAgent {
    pub name: String,
}

/// One entry of a `c2pa.actions.v2` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub action: String,
    pub parameters: ActionParameters,
    #[serde(
        rename = "digitalSourceType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub digital_source_type: Option<String>,
    #[serde(
        rename = "softwareAgent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub software_agent: Option<SoftwareAgent>,
}

/// Payload of both action assertion labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actions<A> {
    pub actions: Vec<A>,
}

/// `io.numbersprotocol.integrity` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integrity {
    pub nid: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(rename = "mediaHash")]
    pub media_hash: String,
    /// Capture time in Unix seconds
    #[serde(
        rename = "captureTimestamp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub capture_timestamp: Option<i64>,
}

/// XMP namespaces referenced by the EXIF block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExifContext {
    #[serde(rename = "EXIF")]
    pub exif: String,
    #[serde(rename = "EXIFEX")]
    pub exifex: String,
    pub dc: String,
    pub rdf: String,
    pub tiff: String,
    pub xmp: String,
}

impl Default for ExifContext {
    fn default() -> Self {
        Self {
            exif: "http://ns.adobe.com/EXIF/1.0/".to_string(),
            exifex: "http://cipa.jp/EXIF/2.32/".to_string(),
            dc: "http://purl.org/dc/elements/1.1/".to_string(),
            rdf: "http://www.w3.org/1999/02/22-rdf-syntax-ns#".to_string(),
            tiff: "http://ns.adobe.com/tiff/1.0/".to_string(),
            xmp: "http://ns.adobe.com/xap/1.0/".to_string(),
        }
    }
}

/// `stds.exif` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exif {
    #[serde(rename = "@context")]
    pub context: ExifContext,
    #[serde(
        rename = "EXIF:GPSLatitude",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_latitude: Option<String>,
    #[serde(
        rename = "EXIF:GPSLongitude",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_longitude: Option<String>,
    #[serde(
        rename = "EXIF:GPSTimeStamp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_timestamp: Option<String>,
    #[serde(
        rename = "EXIF:DateTimeOriginal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time_original: Option<String>,
}

/// `io.numbersprotocol.asset-tree` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTree {
    #[serde(rename = "assetTreeCid")]
    pub cid: String,
    #[serde(rename = "assetTreeSha256")]
    pub sha256: String,
    #[serde(rename = "assetTreeSignature")]
    pub signature: String,
    pub committer: String,
}
