//! State file discovery

use crate::error::{InventoryError, InventoryResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of Terraform state files
pub const STATE_EXTENSION: &str = "tfstate";

/// Find state files directly inside `dir`, sorted by file name
///
/// Subdirectories are not searched.
///
/// # Errors
/// Returns `NoStateFiles` if none are found, or an error if the directory
/// cannot be read
pub fn find_state_files(dir: &Path) -> InventoryResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == STATE_EXTENSION) {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(InventoryError::NoStateFiles(dir.to_path_buf()));
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered state files");
    Ok(files)
}
