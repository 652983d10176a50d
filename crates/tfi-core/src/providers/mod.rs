//! Provider-specific attribute, tag and group rules
//!
//! Each resource type may register a [`ProviderRules`] implementation. Types
//! without one pass their attributes through unchanged and carry no tags.

pub mod aws;
pub mod clc;

use crate::types::Attributes;
use std::collections::{BTreeMap, HashMap};

pub use aws::AwsInstance;
pub use clc::ClcServer;

/// Rules applied to every resource of one resource type
///
/// All methods must be pure functions of their input.
pub trait ProviderRules: Send + Sync {
    /// Map raw state attributes to the hostvars exposed to Ansible
    ///
    /// The result must contain an `id` key.
    fn normalize(&self, raw: &Attributes) -> Attributes {
        raw.clone()
    }

    /// Key/value tags attached to the resource
    fn extract_tags(&self, _attributes: &Attributes) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Groups derived from provider-specific attributes
    fn extra_groups(&self, _attributes: &Attributes) -> Vec<String> {
        Vec::new()
    }
}

/// Rules for resource types without a registered override
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl ProviderRules for Passthrough {}

/// Lookup table from resource type to its rules
pub struct ProviderRegistry {
    rules: HashMap<String, Box<dyn ProviderRules>>,
    fallback: Passthrough,
}

impl ProviderRegistry {
    /// Create a registry with no overrides
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: Passthrough,
        }
    }

    /// Create a registry with the built-in provider rules
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with("aws_instance", AwsInstance)
            .with("clc_server", ClcServer)
    }

    /// Register rules for a resource type, replacing any existing entry
    #[must_use]
    pub fn with(
        mut self,
        resource_type: impl Into<String>,
        rules: impl ProviderRules + 'static,
    ) -> Self {
        self.register(resource_type, rules);
        self
    }

    /// Register rules for a resource type, replacing any existing entry
    pub fn register(
        &mut self,
        resource_type: impl Into<String>,
        rules: impl ProviderRules + 'static,
    ) {
        self.rules.insert(resource_type.into(), Box::new(rules));
    }

    /// Rules for a resource type, falling back to passthrough
    pub fn rules_for(&self, resource_type: &str) -> &dyn ProviderRules {
        match self.rules.get(resource_type) {
            Some(rules) => rules.as_ref(),
            None => &self.fallback,
        }
    }

    /// Normalize a resource's raw attributes
    pub fn resolve(&self, resource_type: &str, raw: &Attributes) -> Attributes {
        self.rules_for(resource_type).normalize(raw)
    }

    /// Whether a resource type has registered rules
    pub fn is_registered(&self, resource_type: &str) -> bool {
        self.rules.contains_key(resource_type)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&String> = self.rules.keys().collect();
        types.sort();
        f.debug_struct("ProviderRegistry").field("types", &types).finish()
    }
}

/// First `n` characters of `s`, or `None` if it is shorter
pub(crate) fn prefix_chars(s: &str, n: usize) -> Option<&str> {
    match s.char_indices().nth(n) {
        Some((end, _)) => Some(&s[..end]),
        None if s.chars().count() == n => Some(s),
        None => None,
    }
}
