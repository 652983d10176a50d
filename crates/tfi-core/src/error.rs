//! Error types for inventory generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors that can occur while building an inventory
#[derive(Error, Debug)]
pub enum InventoryError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Resource key is not of the form `type.name[.index]`
    #[error("couldn't parse keyName: {0}")]
    KeyFormat(String),

    /// Resource key index segment is not a valid counter
    #[error("invalid counter in keyName {key}: {source}")]
    InvalidCounter {
        key: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// State file uses a schema this crate does not model
    #[error("Unsupported state version: {0}")]
    UnsupportedVersion(u64),

    /// Host-detail lookup found no matching resource
    #[error("No such host: {0}")]
    HostNotFound(String),

    /// No state file was given and none was discovered
    #[error("No state files found in {0}")]
    NoStateFiles(PathBuf),

    /// Failed to walk a directory
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}
