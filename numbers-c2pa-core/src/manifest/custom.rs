//! Free-form manifests for callers that bring their own assertions.

use super::assertion::{
    Actions, Assertion, Author, CreativeWork, ACTIONS_LABEL, CREATIVE_WORK_LABEL,
};
use super::definition::{Manifest, DEFAULT_ALG, DEFAULT_TA_URL, DEFAULT_VENDOR};
use crate::error::Result;

/// Default claim generator for custom manifests, used verbatim
pub const DEFAULT_CLAIM_GENERATOR: &str = "Numbers_Protocol";

/// Builder for a manifest with a single author and caller-supplied actions.
///
/// Unlike [`super::ManifestBuilder`], nothing is derived from an asset: the
/// claim generator is taken as-is and every assertion after the
/// CreativeWork comes from the caller.
#[derive(Debug, Clone)]
pub struct CustomManifestBuilder {
    alg: String,
    ta_url: String,
    vendor: String,
    claim_generator: String,
    title: Option<String>,
    author_type: String,
    author_credential: Vec<serde_json::Value>,
    author_identifier: Option<String>,
    author_name: Option<String>,
    actions: Vec<serde_json::Value>,
    custom_assertions: Vec<Assertion>,
}

impl Default for CustomManifestBuilder {
    fn default() -> Self {
        Self {
            alg: DEFAULT_ALG.to_string(),
            ta_url: DEFAULT_TA_URL.to_string(),
            vendor: DEFAULT_VENDOR.to_string(),
            claim_generator: DEFAULT_CLAIM_GENERATOR.to_string(),
            title: None,
            author_type: "Person".to_string(),
            author_credential: Vec::new(),
            author_identifier: None,
            author_name: None,
            actions: Vec::new(),
            custom_assertions: Vec::new(),
        }
    }
}

impl CustomManifestBuilder {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_claim_generator(mut self, claim_generator: impl Into<String>) -> Self {
        self.claim_generator = claim_generator.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// schema.org type of the author, `Person` unless set.
    pub fn with_author_type(mut self, author_type: impl Into<String>) -> Self {
        self.author_type = author_type.into();
        self
    }

    pub fn with_author_credential(mut self, credential: Vec<serde_json::Value>) -> Self {
        self.author_credential = credential;
        self
    }

    pub fn with_author_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.author_identifier = Some(identifier.into());
        self
    }

    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Actions for a `c2pa.actions` assertion. An empty list emits none.
    pub fn with_actions(mut self, actions: Vec<serde_json::Value>) -> Self {
        self.actions = actions;
        self
    }

    /// Append an assertion after the generated ones.
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.custom_assertions.push(assertion);
        self
    }

    pub fn build(&self) -> Result<Manifest> {
        let work = CreativeWork {
            author: Some(vec![Author {
                author_type: self.author_type.clone(),
                credential: Some(self.author_credential.clone()),
                identifier: self.author_identifier.clone(),
                name: self.author_name.clone(),
            }]),
            ..CreativeWork::new()
        };

        let mut assertions = vec![Assertion::new(CREATIVE_WORK_LABEL, &work)?];
        if !self.actions.is_empty() {
            assertions.push(Assertion::new(
                ACTIONS_LABEL,
                &Actions {
                    actions: self.actions.clone(),
                },
            )?);
        }
        assertions.extend(self.custom_assertions.iter().cloned());

        Ok(Manifest {
            alg: self.alg.clone(),
            ta_url: self.ta_url.clone(),
            vendor: self.vendor.clone(),
            claim_generator: self.claim_generator.clone(),
            claim_generator_info: None,
            title: self.title.clone(),
            assertions,
            thumbnail: None,
            extra: serde_json::Map::new(),
        })
    }
}
