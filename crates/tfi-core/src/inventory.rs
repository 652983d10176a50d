//! Inventory aggregation
//!
//! Folds the resources and outputs of one or more state documents into the
//! structure Ansible reads from a dynamic inventory:
//!
//! ```json
//! {
//!   "web": { "hosts": ["i-123"] },
//!   "all": { "env": "staging" },
//!   "_meta": { "hostvars": { "i-123": { "id": "i-123" } } }
//! }
//! ```

use crate::address::AddressResolver;
use crate::error::{InventoryError, InventoryResult};
use crate::groups::classify;
use crate::providers::ProviderRegistry;
use crate::types::{Attributes, OutputVariable, Resource, StateDocument};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Group holding output variables
pub const ALL_GROUP: &str = "all";

/// Reserved key for per-host metadata
pub const META_KEY: &str = "_meta";

/// Value of a single inventory group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupValue {
    /// Ordinary group of host ids
    HostList { hosts: Vec<String> },
    /// Flat key/value data, used by the `all` group for outputs
    KeyValueMap(BTreeMap<String, String>),
}

impl GroupValue {
    /// Host ids, if this is a host list
    pub fn hosts(&self) -> Option<&[String]> {
        match self {
            Self::HostList { hosts } => Some(hosts),
            Self::KeyValueMap(_) => None,
        }
    }

    /// Key/value data, if this is a map
    pub fn vars(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::HostList { .. } => None,
            Self::KeyValueMap(vars) => Some(vars),
        }
    }
}

/// Per-host metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, Attributes>,
}

/// Complete inventory built from state documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    /// Groups by name
    #[serde(flatten)]
    pub groups: BTreeMap<String, GroupValue>,
    /// Host variables
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

impl Inventory {
    /// Look up a group by name
    pub fn group(&self, name: &str) -> Option<&GroupValue> {
        self.groups.get(name)
    }

    /// Host ids of a host-list group
    pub fn hosts(&self, group: &str) -> Option<&[String]> {
        self.group(group).and_then(GroupValue::hosts)
    }

    /// Variables of a single host
    pub fn hostvars(&self, id: &str) -> Option<&Attributes> {
        self.meta.hostvars.get(id)
    }

    /// Append a host to a group; callers skip hosts already in the group
    fn add_host(&mut self, group: &str, id: &str) {
        if group == META_KEY {
            tracing::warn!(host = %id, "ignoring reserved group name {META_KEY}");
            return;
        }

        let value = self
            .groups
            .entry(group.to_string())
            .or_insert_with(|| GroupValue::HostList { hosts: Vec::new() });

        match value {
            GroupValue::HostList { hosts } => hosts.push(id.to_string()),
            GroupValue::KeyValueMap(_) => {
                tracing::warn!(
                    host = %id,
                    group = %group,
                    "group already holds output variables"
                );
            }
        }
    }

    fn merge_outputs(&mut self, outputs: &[OutputVariable]) {
        let value = self
            .groups
            .entry(ALL_GROUP.to_string())
            .or_insert_with(|| GroupValue::KeyValueMap(BTreeMap::new()));

        if matches!(value, GroupValue::HostList { .. }) {
            tracing::warn!("replacing host group {ALL_GROUP} with output variables");
            *value = GroupValue::KeyValueMap(BTreeMap::new());
        }

        if let GroupValue::KeyValueMap(vars) = value {
            for output in outputs {
                vars.insert(output.key.clone(), output.value.clone());
            }
        }
    }
}

/// Builds inventories from state documents
#[derive(Debug, Default)]
pub struct InventoryBuilder {
    registry: ProviderRegistry,
    address: AddressResolver,
}

impl InventoryBuilder {
    /// Create a builder with the built-in provider rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom provider registry
    #[must_use]
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom address resolver
    #[must_use]
    pub fn with_address_resolver(mut self, address: AddressResolver) -> Self {
        self.address = address;
        self
    }

    /// Normalized attributes of a resource
    pub fn normalize(&self, resource: &Resource) -> Attributes {
        self.registry
            .resolve(&resource.resource_type, &resource.raw_attributes)
    }

    /// Groups a resource belongs to, given its normalized attributes
    pub fn groups(&self, resource: &Resource, attributes: &Attributes) -> Vec<String> {
        classify(
            &self.registry,
            &resource.resource_type,
            &resource.base_name,
            attributes,
        )
    }

    /// Address of a resource, read from its raw attributes
    pub fn address<'a>(&self, resource: &'a Resource) -> Option<&'a str> {
        self.address.resolve(&resource.raw_attributes)
    }

    /// Whether a resource has a usable address
    pub fn is_supported(&self, resource: &Resource) -> bool {
        self.address.is_supported(&resource.raw_attributes)
    }

    /// Build the full inventory
    ///
    /// Documents are processed in order. A host id seen more than once keeps
    /// the attributes of its last occurrence; output variables with the same
    /// key keep the value from the last document declaring them.
    pub fn aggregate(&self, documents: &[StateDocument]) -> Inventory {
        let mut inventory = Inventory::default();
        let mut members: HashSet<(String, String)> = HashSet::new();

        for document in documents {
            for resource in document.resources() {
                let attributes = self.normalize(resource);
                let Some(id) = host_id(&attributes) else {
                    tracing::warn!(key = %resource.raw_key, "resource has no id, skipping");
                    continue;
                };
                let id = id.to_string();

                if !self.is_supported(resource) {
                    tracing::debug!(
                        key = %resource.raw_key,
                        name = %resource.name_with_counter(),
                        "resource has no address"
                    );
                }

                for group in self.groups(resource, &attributes) {
                    if members.insert((group.clone(), id.clone())) {
                        inventory.add_host(&group, &id);
                    }
                }

                if inventory.meta.hostvars.insert(id, attributes).is_some() {
                    tracing::debug!(
                        key = %resource.raw_key,
                        "host id seen before, overwriting hostvars"
                    );
                }
            }

            if !document.outputs().is_empty() {
                inventory.merge_outputs(document.outputs());
            }
        }

        tracing::debug!(
            documents = documents.len(),
            groups = inventory.groups.len(),
            hosts = inventory.meta.hostvars.len(),
            "built inventory"
        );

        inventory
    }

    /// Normalized attributes of the last resource with the given host id
    ///
    /// Matches the `hostvars` entry `aggregate` keeps for that id.
    ///
    /// # Errors
    /// Returns `HostNotFound` if no loaded resource has that id
    pub fn find_host(&self, documents: &[StateDocument], id: &str) -> InventoryResult<Attributes> {
        documents
            .iter()
            .rev()
            .flat_map(|document| document.resources().iter().rev())
            .map(|resource| self.normalize(resource))
            .find(|attributes| host_id(attributes) == Some(id))
            .ok_or_else(|| InventoryError::HostNotFound(id.to_string()))
    }
}

fn host_id(attributes: &Attributes) -> Option<&str> {
    attributes
        .get("id")
        .map(String::as_str)
        .filter(|id| !id.is_empty())
}
