//! Resource key parser
//!
//! State files key each resource as `type.name`, with a trailing `.index`
//! when the resource was created with `count`.

use crate::error::{InventoryError, InventoryResult};
use once_cell::sync::Lazy;
use regex::Regex;

// type.name.0
static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\.([A-Za-z0-9_\-]+)(?:\.([0-9]+))?$").expect("resource key pattern is valid")
});

/// Components of a resource key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKey {
    pub resource_type: String,
    pub base_name: String,
    pub counter: u64,
}

/// Split a raw resource key into type, name and counter
///
/// # Errors
/// Returns `KeyFormat` if the key does not match `type.name[.index]`, or
/// `InvalidCounter` if the index does not fit a counter.
pub fn parse_key(raw_key: &str) -> InventoryResult<ResourceKey> {
    let caps = KEY_PATTERN
        .captures(raw_key)
        .ok_or_else(|| InventoryError::KeyFormat(raw_key.to_string()))?;

    let counter = match caps.get(3) {
        Some(index) => {
            index
                .as_str()
                .parse()
                .map_err(|source| InventoryError::InvalidCounter {
                    key: raw_key.to_string(),
                    source,
                })?
        }
        None => 0,
    };

    Ok(ResourceKey {
        resource_type: caps[1].to_string(),
        base_name: caps[2].to_string(),
        counter,
    })
}
