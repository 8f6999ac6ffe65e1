//! The manifest definition handed to c2patool.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::assertion::Assertion;
use crate::error::Result;

/// Default signing algorithm
pub const DEFAULT_ALG: &str = "es256";

/// Default RFC 3161 time authority
pub const DEFAULT_TA_URL: &str = "http://timestamp.digicert.com";

/// Default vendor prefix for manifest labels
pub const DEFAULT_VENDOR: &str = "numbersprotocol";

/// Default human-readable claim generator name
pub const DEFAULT_CLAIM_GENERATOR_NAME: &str = "Numbers Protocol";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimGeneratorInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Keys not modelled above, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimGeneratorInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            extra: Map::new(),
        }
    }
}

/// Thumbnail reference resolved by c2patool from a local file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// MIME type of the thumbnail
    pub format: String,
    /// Path of the thumbnail file
    pub identifier: String,
}

/// A c2patool manifest definition.
///
/// Optional fields are omitted from the JSON rather than written as `null`.
/// Top-level keys this type does not model (`ingredients`, `format`,
/// `label` and so on) are carried through `extra` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub alg: String,
    pub ta_url: String,
    pub vendor: String,
    pub claim_generator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_generator_info: Option<Vec<ClaimGeneratorInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub assertions: Vec<Assertion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Serialize to compact JSON, as written for the tool.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find the first assertion with the given label.
    pub fn assertion(&self, label: &str) -> Option<&Assertion> {
        self.assertions.iter().find(|a| a.label == label)
    }

    /// Return a copy of this manifest that references a thumbnail.
    pub fn with_thumbnail(&self, thumbnail: Thumbnail) -> Self {
        Self {
            thumbnail: Some(thumbnail),
            ..self.clone()
        }
    }
}
