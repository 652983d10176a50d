//! Shared types for state documents and resources

use crate::error::InventoryResult;
use crate::parser::key::{parse_key, ResourceKey};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Flat attribute bag, as stored in the state file or exposed as hostvars
pub type Attributes = BTreeMap<String, String>;

/// One managed infrastructure object extracted from a state document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Key as found in the state file, e.g. `aws_instance.web.2`
    pub raw_key: String,
    /// Provider resource kind, e.g. `aws_instance`
    pub resource_type: String,
    /// User-assigned logical name, e.g. `web`
    pub base_name: String,
    /// Index from `count`; zero when the key carries none
    pub counter: u64,
    /// Attributes exactly as found in state
    pub raw_attributes: Attributes,
}

impl Resource {
    /// Build a resource from its state key and raw attributes
    ///
    /// Fails if the key is not of the form `type.name[.index]`.
    pub fn new(raw_key: impl Into<String>, raw_attributes: Attributes) -> InventoryResult<Self> {
        let raw_key = raw_key.into();
        let ResourceKey {
            resource_type,
            base_name,
            counter,
        } = parse_key(&raw_key)?;

        Ok(Self {
            raw_key,
            resource_type,
            base_name,
            counter,
            raw_attributes,
        })
    }

    /// Resource name with its counter, e.g. `web.0`
    ///
    /// Resources created without `count` always report zero.
    pub fn name_with_counter(&self) -> String {
        format!("{}.{}", self.base_name, self.counter)
    }
}

/// A document-level output variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputVariable {
    pub key: String,
    pub value: String,
}

impl OutputVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A parsed state document
#[derive(Debug, Clone, Default, Serialize)]
pub struct StateDocument {
    /// Path the document was read from (empty for in-memory documents)
    pub path: PathBuf,
    /// SHA256 hash of the document contents
    pub sha256: String,
    resources: Vec<Resource>,
    outputs: Vec<OutputVariable>,
}

impl StateDocument {
    pub fn new(resources: Vec<Resource>, outputs: Vec<OutputVariable>) -> Self {
        Self {
            path: PathBuf::new(),
            sha256: String::new(),
            resources,
            outputs,
        }
    }

    /// Resources in state order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Output variables in state order
    pub fn outputs(&self) -> &[OutputVariable] {
        &self.outputs
    }
}
