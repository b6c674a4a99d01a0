//! Configuration and state engine for the focusboard desktop status-board.
//!
//! The board window is divided into named display slots, each populated by
//! one of a closed set of widget kinds; the arrangement is driven entirely
//! by a persisted configuration. This crate decides, on every launch, what
//! widget goes where and what data each stateful widget resumes with. It
//! owns two pretty-printed JSON documents, rewritten wholesale on save:
//!
//! - **config.json** — display index, slot-to-kind layout mapping, widget
//!   order ([`ConfigStore`])
//! - **state.json** — todo list plus five independent widget state blocks
//!   ([`StateStore`])
//!
//! # Guarantees
//!
//! - **Totality**: [`normalize_layout`] and [`normalize_order`] never fail;
//!   arbitrary malformed input degrades to built-in defaults.
//! - **Self-healing stores**: a missing or corrupt file loads as a default
//!   record that is written back to disk before it is returned. Only write
//!   failures propagate, as [`StoreError`].
//! - **Silent degrade, observable**: dropped tokens and recoveries surface
//!   on an explicitly injected [`Diagnostics`] channel instead of a global
//!   logger, and never as user-visible errors.
//!
//! # Concurrency
//!
//! All I/O is synchronous and happens on the UI event loop. Widgets follow
//! a read-modify-write contract over the whole state record; concurrent
//! cycles in one process tick are last-writer-wins. See [`StateStore`] for
//! the details.
//!
//! Rendering, widget composition, and the settings dialog are external
//! collaborators: they consume [`ConfigRecord`] and [`StateRecord`] values
//! and hand mutated records back to the stores.

/// Persisted launch configuration: record schema and self-healing store.
pub mod config;

/// Dependency-injected diagnostic event channel.
pub mod diag;

/// Write-side error types.
pub mod error;

/// Layout and widget-order normalization, plus the preset table.
pub mod layout;

/// Platform default locations for the record files.
pub mod paths;

/// Closed enumerations of widget kinds, slots, and layout modes.
pub mod registry;

/// Persisted application state: schema, defensive parsing, store.
pub mod state;

mod persist;

pub use config::{ConfigRecord, ConfigStore};
pub use diag::{DiagEvent, Diagnostics, RecoveryReason};
pub use error::StoreError;
pub use layout::{normalize_layout, normalize_order, LayoutMapping, WidgetOrder};
pub use registry::{LayoutMode, Slot, WidgetKind};
pub use state::{StateRecord, StateStore, TodoItem};
