//! JSON output formatter

use crate::error::InventoryResult;
use serde::Serialize;

/// Convert an inventory or a host's variables to a JSON string
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> InventoryResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
