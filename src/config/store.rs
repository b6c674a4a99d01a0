//! Self-healing load/save of the configuration record.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::schema::ConfigRecord;
use crate::diag::{DiagEvent, Diagnostics};
use crate::error::StoreError;
use crate::layout::{normalize_layout, normalize_order};
use crate::paths;
use crate::persist;
use crate::registry::LayoutMode;

/// Owner of the configuration record file.
///
/// Exactly one file path; `save` rewrites it wholesale. Loads never fail:
/// missing or corrupt content degrades to defaults that are written back
/// before they are returned, so callers always receive a record that exists
/// on disk. Only write failures propagate.
pub struct ConfigStore {
    path: PathBuf,
    mode: LayoutMode,
    diag: Diagnostics,
}

impl ConfigStore {
    /// A store over an explicit file path, normalizing for `mode`.
    pub fn new(path: impl Into<PathBuf>, mode: LayoutMode, diag: Diagnostics) -> Self {
        Self {
            path: path.into(),
            mode,
            diag,
        }
    }

    /// A store over the platform default location (`config.json` in the
    /// app's config directory).
    pub fn at_default_path(mode: LayoutMode, diag: Diagnostics) -> Self {
        Self::new(paths::config_path(), mode, diag)
    }

    /// The file this store owns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The layout mode records are normalized against.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Loads the configuration record.
    ///
    /// A missing, unreadable, or non-object file synthesizes the default
    /// record and persists it before returning. Field-level recovery: a
    /// non-integer `display_index` degrades to unset, and `layout` and
    /// `widget_order` always pass through their normalizers.
    pub fn load(&self) -> Result<ConfigRecord, StoreError> {
        match persist::read_object(&self.path) {
            Ok(data) => {
                let display_index = data
                    .get("display_index")
                    .and_then(Value::as_i64)
                    .unwrap_or(ConfigRecord::DISPLAY_UNSET);
                let layout = normalize_layout(data.get("layout"), self.mode, &self.diag);
                let widget_order = normalize_order(data.get("widget_order"), &self.diag);
                Ok(ConfigRecord {
                    display_index,
                    layout,
                    widget_order,
                })
            }
            Err(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    ?reason,
                    "configuration reverted to defaults"
                );
                self.diag.emit(DiagEvent::RecoveredDefaults {
                    path: self.path.clone(),
                    reason,
                });
                let record = ConfigRecord::default_for(self.mode);
                self.save(&record)?;
                Ok(record)
            }
        }
    }

    /// Serializes the record and rewrites the file wholesale.
    pub fn save(&self, record: &ConfigRecord) -> Result<(), StoreError> {
        persist::write_record(&self.path, record)
    }
}
