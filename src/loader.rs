//! Schema Document Loading
//!
//! Finds lowered schema documents on disk. Directories are walked recursively
//! for `*.json` files, in a stable (sorted) order.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

/// Expand a file or directory into the JSON documents it contains
pub fn collect_schema_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().map(|ext| ext != "json").unwrap_or(true) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    tracing::debug!(root = %path.display(), count = files.len(), "collected schema files");
    Ok(files)
}

/// Parse one schema document, keeping property order
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
