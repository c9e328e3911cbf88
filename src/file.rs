// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::error::StoreError;
use crate::record::PersonRecord;

/// Stable sort by name: plain byte order, ties keep their input order.
pub fn sort_records(records: &mut [PersonRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Pretty JSON for `records`, sorted by name.
pub fn to_json_string(records: &[PersonRecord]) -> Result<String, StoreError> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

/// Sort, serialize and write the output document in one go.
pub fn write_json(records: &[PersonRecord], path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = to_json_string(records)?;
    fs::write(path, contents).map_err(|e| StoreError::io(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() && !dir.is_dir() {
        return Err(StoreError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    }
    Ok(())
}
