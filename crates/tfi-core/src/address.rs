//! Address resolution for resources

use crate::types::Attributes;

/// Attribute names checked, in order, for a resource's address
pub const CANDIDATE_KEYS: &[&str] = &[
    "ipv4_address",                                        // DigitalOcean
    "public_ip",                                           // AWS
    "private_ip",                                          // AWS
    "ipaddress",                                           // CloudStack
    "ip_address",                                          // VMware
    "access_ip_v4",                                        // OpenStack
    "floating_ip",                                         // OpenStack
    "network_interface.0.access_config.0.nat_ip",          // GCE
    "network_interface.0.access_config.0.assigned_nat_ip", // GCE
    "network_interface.0.address",                         // GCE
    "private_ip_address",                                  // CLC
];

/// Picks the address of a resource from its attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressResolver {
    key_name: Option<String>,
}

impl AddressResolver {
    /// Create a resolver
    ///
    /// When `key_name` is set, only that attribute is consulted. An empty
    /// key name is treated as unset.
    pub fn new(key_name: Option<String>) -> Self {
        Self {
            key_name: key_name.filter(|k| !k.is_empty()),
        }
    }

    /// The configured override key, if any
    pub fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }

    /// Address of a resource, or `None` if it has none
    pub fn resolve<'a>(&self, attributes: &'a Attributes) -> Option<&'a str> {
        let value = |key: &str| attributes.get(key).map(String::as_str);

        match &self.key_name {
            Some(key) => value(key.as_str()).filter(|v| !v.trim().is_empty()),
            None => CANDIDATE_KEYS
                .iter()
                .copied()
                .find_map(|key| value(key).filter(|v| !v.is_empty())),
        }
    }

    /// Whether the resource has a usable address
    pub fn is_supported(&self, attributes: &Attributes) -> bool {
        self.resolve(attributes).is_some()
    }
}
