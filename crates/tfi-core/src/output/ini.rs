//! INI-style output formatter
//!
//! Produces the static inventory file format: one `[group]` section per
//! group, listing its hosts. The `all` group lists its output values, which
//! are typically addresses.

use crate::inventory::{GroupValue, Inventory};

/// Convert inventory to INI text
#[must_use]
pub fn to_ini(inventory: &Inventory) -> String {
    let mut output = String::new();

    for (name, group) in &inventory.groups {
        output.push_str(&format!("[{name}]\n"));
        match group {
            GroupValue::HostList { hosts } => {
                for host in hosts {
                    output.push_str(&format!("{host}\n"));
                }
            }
            GroupValue::KeyValueMap(vars) => {
                for value in vars.values() {
                    output.push_str(&format!("{value}\n"));
                }
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_to_ini() {
        let mut inventory = Inventory::default();
        inventory.groups.insert(
            "web".to_string(),
            GroupValue::HostList {
                hosts: vec!["i-1".to_string(), "i-2".to_string()],
            },
        );
        inventory.groups.insert(
            "all".to_string(),
            GroupValue::KeyValueMap(BTreeMap::from([
                ("bastion".to_string(), "10.0.0.1".to_string()),
                ("web_ip".to_string(), "10.0.0.2".to_string()),
            ])),
        );
        inventory
            .meta
            .hostvars
            .insert("i-1".to_string(), BTreeMap::new());

        assert_eq!(
            to_ini(&inventory),
            "[all]\n10.0.0.1\n10.0.0.2\n\n[web]\ni-1\ni-2\n\n"
        );
    }

    #[test]
    fn test_to_ini_empty() {
        assert_eq!(to_ini(&Inventory::default()), "");
    }
}
