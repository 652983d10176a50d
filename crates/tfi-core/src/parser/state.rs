//! terraform.tfstate parser

use crate::error::{InventoryError, InventoryResult};
use crate::types::{Attributes, OutputVariable, Resource, StateDocument};
use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Newest state format version with a `modules` list
const MAX_STATE_VERSION: u64 = 3;

/// Raw terraform.tfstate structure for parsing
#[derive(Debug, Deserialize)]
struct RawState {
    version: Option<u64>,
    #[serde(default)]
    modules: Vec<RawModule>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    #[serde(default)]
    outputs: BTreeMap<String, Value>,
    #[serde(default)]
    resources: BTreeMap<String, RawResourceState>,
}

#[derive(Debug, Deserialize)]
struct RawResourceState {
    primary: Option<RawInstanceState>,
}

#[derive(Debug, Deserialize)]
struct RawInstanceState {
    #[serde(default)]
    id: String,
    #[serde(default)]
    attributes: Attributes,
}

/// Read and parse a state file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn read_state(path: &Path) -> InventoryResult<StateDocument> {
    let content = std::fs::read_to_string(path)?;
    parse_state(path, &content)
}

/// Parse the contents of a state file
///
/// Resources whose keys cannot be parsed are skipped with a warning.
///
/// # Errors
/// Returns an error if the content is not valid state JSON or uses an
/// unsupported state version
pub fn parse_state(path: &Path, content: &str) -> InventoryResult<StateDocument> {
    let raw: RawState = serde_json::from_str(content).map_err(InventoryError::JsonParse)?;

    if let Some(version) = raw.version {
        if version > MAX_STATE_VERSION {
            return Err(InventoryError::UnsupportedVersion(version));
        }
    }

    let mut resources = Vec::new();
    let mut outputs = Vec::new();

    for module in raw.modules {
        for (key, value) in module.outputs {
            outputs.push(OutputVariable::new(key, output_value(value)));
        }

        for (key, state) in module.resources {
            let Some(primary) = state.primary else {
                tracing::debug!(key = %key, "skipping resource without primary instance");
                continue;
            };

            let mut attributes = primary.attributes;
            if !attributes.contains_key("id") {
                attributes.insert("id".to_string(), primary.id);
            }

            match Resource::new(key.as_str(), attributes) {
                Ok(resource) => resources.push(resource),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to parse resource: {e}");
                }
            }
        }
    }

    let mut document = StateDocument::new(resources, outputs);
    document.path = path.to_path_buf();
    document.sha256 = compute_sha256(content);

    tracing::debug!(
        path = %document.path.display(),
        sha256 = %document.sha256,
        resources = document.resources().len(),
        outputs = document.outputs().len(),
        "loaded state document"
    );

    Ok(document)
}

/// Flatten an output to a string
///
/// Outputs are either a bare value or an object carrying `value`, `type` and
/// `sensitive`. Non-string values are rendered as compact JSON.
fn output_value(value: Value) -> String {
    match value {
        Value::Object(mut map) if map.contains_key("value") => {
            output_value(map.remove("value").unwrap_or(Value::Null))
        }
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn compute_sha256(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
