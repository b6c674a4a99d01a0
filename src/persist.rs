//! Whole-file JSON persistence shared by the two stores.
//!
//! Writes use the temp-file-then-rename pattern:
//! 1. Write pretty-printed JSON to a temp file with a timestamp suffix
//! 2. Fsync to disk
//! 3. Rename the temp file over the record file (atomic on one filesystem)
//!
//! On failure before the rename, the temp file is preserved as a safety
//! copy. Reads classify failures instead of raising; the stores turn a
//! classification into a freshly written default record.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use serde_json::{Map, Value};

use crate::diag::RecoveryReason;
use crate::error::StoreError;

/// Reads the record file and returns its top-level JSON object, or the
/// reason it is unusable.
pub(crate) fn read_object(path: &Path) -> Result<Map<String, Value>, RecoveryReason> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(RecoveryReason::Missing),
        Err(_) => return Err(RecoveryReason::Unreadable),
    };
    let value: Value = serde_json::from_str(&content).map_err(|_| RecoveryReason::Unreadable)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(RecoveryReason::NotAnObject),
    }
}

/// Serializes `record` as pretty-printed JSON and atomically replaces the
/// file at `path`, creating parent directories as needed.
pub(crate) fn write_record<T: serde::Serialize>(path: &Path, record: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(record).map_err(|e| StoreError::Serialize {
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let file_name = path.file_name().and_then(OsStr::to_str).unwrap_or("record");
    let temp_path = path.with_file_name(format!("{file_name}.tmp.{timestamp}"));

    fs::write(&temp_path, json).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;

    // Fsync before the rename so the rename never exposes a partial file.
    let file = fs::File::open(&temp_path).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;
    file.sync_all().map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| StoreError::Rename {
        path: path.to_path_buf(),
        temp_path: temp_path.clone(),
        source,
    })?;

    Ok(())
}
