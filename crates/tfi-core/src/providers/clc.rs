//! CenturyLink Cloud servers

use super::{prefix_chars, ProviderRules};
use crate::types::Attributes;

/// Rules for `clc_server`
///
/// Exposes a fixed attribute set with SSH connection variables, and groups
/// servers by the datacenter encoded in the first three characters of their
/// id.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClcServer;

const PASSTHROUGH_KEYS: &[&str] = &[
    "id",
    "cpu",
    "memory_mb",
    "name",
    "type",
    "storage_type",
    "private_ip_address",
];

impl ProviderRules for ClcServer {
    fn normalize(&self, raw: &Attributes) -> Attributes {
        let get = |key: &str| raw.get(key).cloned().unwrap_or_default();

        let mut out: Attributes = PASSTHROUGH_KEYS
            .iter()
            .map(|key| ((*key).to_string(), get(key)))
            .collect();

        out.insert("ansible_ssh_host".to_string(), get("private_ip_address"));
        out.insert("ansible_ssh_user".to_string(), "root".to_string());
        out.insert("ansible_ssh_pass".to_string(), get("password"));

        if let Some(dc) = raw.get("id").and_then(|id| prefix_chars(id, 3)) {
            out.insert("datacenter".to_string(), dc.to_uppercase());
        }

        out
    }

    fn extra_groups(&self, attributes: &Attributes) -> Vec<String> {
        attributes
            .get("id")
            .and_then(|id| prefix_chars(id, 3))
            .map(|dc| vec![format!("datacenter_{}", dc.to_lowercase())])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_server() -> Attributes {
        [
            ("id", "va1acmeweb01"),
            ("cpu", "2"),
            ("memory_mb", "4096"),
            ("name", "VA1ACMEWEB01"),
            ("type", "standard"),
            ("storage_type", "premium"),
            ("private_ip_address", "10.50.0.12"),
            ("password", "s3cret"),
            ("group_id", "abc123"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
    }

    #[test]
    fn test_normalize() {
        let raw = raw_server();
        let out = ClcServer.normalize(&raw);

        assert_eq!(out["id"], "va1acmeweb01");
        assert_eq!(out["memory_mb"], "4096");
        assert_eq!(out["ansible_ssh_host"], "10.50.0.12");
        assert_eq!(out["ansible_ssh_user"], "root");
        assert_eq!(out["ansible_ssh_pass"], "s3cret");
        assert_eq!(out["datacenter"], "VA1");
        assert!(!out.contains_key("group_id"));
        assert!(!out.contains_key("password"));
        // input untouched
        assert_eq!(raw, raw_server());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = raw_server();
        assert_eq!(ClcServer.normalize(&raw), ClcServer.normalize(&raw));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let raw: Attributes = [("id".to_string(), "ab".to_string())].into_iter().collect();
        let out = ClcServer.normalize(&raw);
        assert_eq!(out["id"], "ab");
        assert_eq!(out["cpu"], "");
        assert_eq!(out["ansible_ssh_pass"], "");
        assert!(!out.contains_key("datacenter"));
    }

    #[test]
    fn test_datacenter_group() {
        let out = ClcServer.normalize(&raw_server());
        assert_eq!(ClcServer.extra_groups(&out), vec!["datacenter_va1".to_string()]);
    }

    #[test]
    fn test_datacenter_group_skipped_for_short_id() {
        let raw: Attributes = [("id".to_string(), "v1".to_string())].into_iter().collect();
        assert!(ClcServer.extra_groups(&raw).is_empty());
    }
}
