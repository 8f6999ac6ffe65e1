//! Manifest builder for Numbers Protocol assets
//!
//! Turns creator identity, capture time, geolocation and provenance inputs
//! into the assertion set c2patool signs into the asset.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::assertion::{
    Action, ActionParameters, Actions, AssetTree, Assertion, Author, CreativeWork, Exif,
    IngredientRef, Integrity, SoftwareAgent, ACTIONS_V2_LABEL, ACTION_OPENED, ASSET_TREE_LABEL,
    CREATIVE_WORK_LABEL, EXIF_LABEL, INGREDIENT_URL, INTEGRITY_LABEL,
};
use super::definition::{
    ClaimGeneratorInfo, Manifest, DEFAULT_ALG, DEFAULT_CLAIM_GENERATOR_NAME, DEFAULT_TA_URL,
    DEFAULT_VENDOR,
};
use super::format::{
    digital_source_type_uri, format_claim_generator, format_datetime, format_latitude,
    format_longitude, format_timestamp, GeoFormat,
};
use crate::error::{NumbersC2paError, Result};

/// Commit that links the asset into a Numbers Protocol asset tree.
///
/// The asset-tree assertion is only emitted when every field is non-empty.
#[derive(Debug, Clone, Default)]
pub struct AssetTreeLink {
    pub cid: String,
    pub sha256: String,
    pub signature: String,
    pub committer: String,
}

impl AssetTreeLink {
    fn is_complete(&self) -> bool {
        !(self.cid.is_empty()
            || self.sha256.is_empty()
            || self.signature.is_empty()
            || self.committer.is_empty())
    }
}

/// Builder for the standard Numbers Protocol manifest.
///
/// # Example
///
/// ```
/// use numbers_c2pa_core::ManifestBuilder;
///
/// let manifest = ManifestBuilder::new(
///     "bafkreicxvzt6xwmu6rrghe4bwixup5aqrw5abcskg5mpt2gnt2h7buwwzm",
///     "Tester",
///     "0x2FBfE8F2bA00B255e60c220755040B597d09aFFa",
///     "57ae67ebd994f462639381b22f47f4108dba008a4a3758f9e8cd9e8ff0d2d6cb",
/// )
/// .with_location(25.033964, 121.564468)
/// .with_digital_source_type("trainedAlgorithmicMedia")
/// .build()
/// .unwrap();
///
/// assert_eq!(manifest.claim_generator, "Numbers_Protocol");
/// ```
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    nid: String,
    creator_name: String,
    creator_public_key: String,
    asset_hash: String,
    date_created: Option<DateTime<Utc>>,
    date_captured: Option<DateTime<Utc>>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    geo_format: GeoFormat,
    alg: String,
    ta_url: String,
    vendor: String,
    claim_generator_name: String,
    digital_source_type: Option<String>,
    generated_by: Option<String>,
    asset_tree: Option<AssetTreeLink>,
}

impl ManifestBuilder {
    /// Start a manifest for the asset `nid` whose SHA-256 is `asset_hash` (hex).
    pub fn new(
        nid: impl Into<String>,
        creator_name: impl Into<String>,
        creator_public_key: impl Into<String>,
        asset_hash: impl Into<String>,
    ) -> Self {
        Self {
            nid: nid.into(),
            creator_name: creator_name.into(),
            creator_public_key: creator_public_key.into(),
            asset_hash: asset_hash.into(),
            date_created: None,
            date_captured: None,
            latitude: None,
            longitude: None,
            geo_format: GeoFormat::default(),
            alg: DEFAULT_ALG.to_string(),
            ta_url: DEFAULT_TA_URL.to_string(),
            vendor: DEFAULT_VENDOR.to_string(),
            claim_generator_name: DEFAULT_CLAIM_GENERATOR_NAME.to_string(),
            digital_source_type: None,
            generated_by: None,
            asset_tree: None,
        }
    }

    pub fn with_date_created(mut self, date: DateTime<Utc>) -> Self {
        self.date_created = Some(date);
        self
    }

    pub fn with_date_captured(mut self, date: DateTime<Utc>) -> Self {
        self.date_captured = Some(date);
        self
    }

    /// Set the capture location in decimal degrees.
    ///
    /// Out-of-range values are dropped from the manifest, not rejected.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Select how GPS coordinates are written in the EXIF assertion.
    pub fn with_geo_format(mut self, format: GeoFormat) -> Self {
        self.geo_format = format;
        self
    }

    pub fn with_alg(mut self, alg: impl Into<String>) -> Self {
        self.alg = alg.into();
        self
    }

    pub fn with_ta_url(mut self, ta_url: impl Into<String>) -> Self {
        self.ta_url = ta_url.into();
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_claim_generator_name(mut self, name: impl Into<String>) -> Self {
        self.claim_generator_name = name.into();
        self
    }

    /// IPTC digital source type code (e.g. `digitalCapture`) or full URI.
    pub fn with_digital_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.digital_source_type = Some(source_type.into());
        self
    }

    /// Name of the software that generated the asset.
    pub fn with_generated_by(mut self, agent: impl Into<String>) -> Self {
        self.generated_by = Some(agent.into());
        self
    }

    pub fn with_asset_tree(mut self, link: AssetTreeLink) -> Self {
        self.asset_tree = Some(link);
        self
    }

    /// Assemble the manifest.
    ///
    /// Fails only when the asset hash is not valid hex.
    pub fn build(&self) -> Result<Manifest> {
        let opened = self.opened_action()?;

        let latitude = self
            .latitude
            .and_then(|v| format_latitude(v, GeoFormat::Decimal));
        let longitude = self
            .longitude
            .and_then(|v| format_longitude(v, GeoFormat::Decimal));
        let location_created = match (&latitude, &longitude) {
            (Some(lat), Some(lon)) => Some(format!("{lat}, {lon}")),
            _ => None,
        };

        let mut creative_work = CreativeWork::for_nid(&self.nid);
        if !self.creator_name.is_empty() {
            creative_work.author = Some(vec![Author::person(&self.creator_name)]);
        }
        creative_work.date_created = self.date_created.as_ref().map(format_datetime);
        creative_work.location_created = location_created;

        let integrity = Integrity {
            nid: self.nid.clone(),
            public_key: self.creator_public_key.clone(),
            media_hash: self.asset_hash.clone(),
            capture_timestamp: self.date_captured.as_ref().map(format_timestamp),
        };

        let exif = Exif {
            gps_latitude: self
                .latitude
                .and_then(|v| format_latitude(v, self.geo_format)),
            gps_longitude: self
                .longitude
                .and_then(|v| format_longitude(v, self.geo_format)),
            gps_timestamp: self.date_captured.as_ref().map(format_datetime),
            date_time_original: self.date_captured.as_ref().map(format_datetime),
            ..Default::default()
        };

        let mut assertions = vec![
            Assertion::new(CREATIVE_WORK_LABEL, &creative_work)?,
            Assertion::new(ACTIONS_V2_LABEL, &Actions { actions: vec![opened] })?,
            Assertion::new(INTEGRITY_LABEL, &integrity)?,
            Assertion::new(EXIF_LABEL, &exif)?.with_kind("Json"),
        ];

        if let Some(link) = self.asset_tree.as_ref().filter(|l| l.is_complete()) {
            let tree = AssetTree {
                cid: link.cid.clone(),
                sha256: link.sha256.clone(),
                signature: link.signature.clone(),
                committer: link.committer.clone(),
            };
            assertions.push(Assertion::new(ASSET_TREE_LABEL, &tree)?);
        }

        debug!(
            nid = %self.nid,
            assertions = assertions.len(),
            has_location = exif.gps_latitude.is_some() || exif.gps_longitude.is_some(),
            "Built manifest"
        );

        Ok(Manifest {
            alg: self.alg.clone(),
            ta_url: self.ta_url.clone(),
            vendor: self.vendor.clone(),
            claim_generator: format_claim_generator(&self.claim_generator_name),
            claim_generator_info: Some(vec![ClaimGeneratorInfo::new(
                self.claim_generator_name.clone(),
            )]),
            title: Some(self.nid.clone()),
            assertions,
            thumbnail: None,
            extra: serde_json::Map::new(),
        })
    }

    fn opened_action(&self) -> Result<Action> {
        let digest = hex::decode(&self.asset_hash)
            .map_err(|e| NumbersC2paError::InvalidAssetHash(format!("{}: {e}", self.asset_hash)))?;

        Ok(Action {
            action: ACTION_OPENED.to_string(),
            parameters: ActionParameters {
                ingredients: vec![IngredientRef {
                    url: INGREDIENT_URL.to_string(),
                    alg: "sha256".to_string(),
                    hash: STANDARD.encode(digest),
                }],
            },
            digital_source_type: self
                .digital_source_type
                .as_deref()
                .map(digital_source_type_uri),
            software_agent: self
                .generated_by
                .as_ref()
                .map(|name| SoftwareAgent { name: name.clone() }),
        })
    }
}
