//! Self-healing load/save of the application state record.

use std::path::{Path, PathBuf};

use crate::diag::{DiagEvent, Diagnostics};
use crate::error::StoreError;
use crate::paths;
use crate::persist;
use crate::state::parse;
use crate::state::schema::StateRecord;

/// Owner of the state record file.
///
/// Exactly one file path; `save` rewrites it wholesale. Loads never fail:
/// missing or corrupt content degrades to the zero-value record, written
/// back before it is returned.
///
/// # Read-modify-write contract
///
/// Any component mutating one block must first load the full current record
/// (not reuse a stale in-memory copy), mutate only its block, then save the
/// full record; [`update`](Self::update) codifies that cycle. Two components
/// that each hold a pre-mutation copy and save independently race: the
/// second save silently discards the first one's change. In the board's
/// single-threaded event loop this is an accepted last-writer-wins property,
/// not something the store locks against.
pub struct StateStore {
    path: PathBuf,
    diag: Diagnostics,
}

impl StateStore {
    /// A store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>, diag: Diagnostics) -> Self {
        Self {
            path: path.into(),
            diag,
        }
    }

    /// A store over the platform default location (`state.json` in the
    /// app's config directory).
    pub fn at_default_path(diag: Diagnostics) -> Self {
        Self::new(paths::state_path(), diag)
    }

    /// The file this store owns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state record.
    ///
    /// A missing, unreadable, or non-object file synthesizes the zero-value
    /// record and persists it before returning. Well-formed files parse
    /// defensively: each block and the todo list recovers independently.
    pub fn load(&self) -> Result<StateRecord, StoreError> {
        match persist::read_object(&self.path) {
            Ok(data) => Ok(parse::parse_state(&data)),
            Err(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    ?reason,
                    "application state reverted to defaults"
                );
                self.diag.emit(DiagEvent::RecoveredDefaults {
                    path: self.path.clone(),
                    reason,
                });
                let record = StateRecord::default();
                self.save(&record)?;
                Ok(record)
            }
        }
    }

    /// Serializes all six parts unconditionally and rewrites the file
    /// wholesale. A block is always written as an object, never null or
    /// missing.
    pub fn save(&self, record: &StateRecord) -> Result<(), StoreError> {
        persist::write_record(&self.path, record)
    }

    /// One read-modify-write cycle: loads a fresh copy, applies `mutate`,
    /// saves, and returns the saved record.
    ///
    /// Call sites that go through `update` cannot accidentally clobber
    /// another block with a stale copy, but updates in separate widgets
    /// remain independent cycles; see the struct-level race note.
    pub fn update<F>(&self, mutate: F) -> Result<StateRecord, StoreError>
    where
        F: FnOnce(&mut StateRecord),
    {
        let mut record = self.load()?;
        mutate(&mut record);
        self.save(&record)?;
        Ok(record)
    }
}
