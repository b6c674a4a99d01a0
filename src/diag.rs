//! Diagnostic event channel for observing silent-degrade decisions.
//!
//! Malformed configuration never raises in this crate: unknown tokens are
//! dropped and missing fields are defaulted. The [`Diagnostics`] handle makes
//! those drops observable without changing the behavior. It is constructed
//! explicitly at process start and passed to the components that emit; there
//! is no process-wide singleton.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::registry::{LayoutMode, WidgetKind};

/// Why a store fell back to a freshly written default record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryReason {
    /// The file does not exist (first run).
    Missing,
    /// The file exists but could not be read or is not parseable JSON.
    Unreadable,
    /// The file parsed but the top level is not a JSON object.
    NotAnObject,
}

/// A single observation emitted while normalizing or loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagEvent {
    /// A preset name was not known for the given layout mode.
    UnknownPreset { mode: LayoutMode, name: String },
    /// An object key did not name a slot of the active mode.
    UnknownSlot { mode: LayoutMode, token: String },
    /// A token was not a member of the widget-kind enumeration.
    UnknownKind { token: String },
    /// A widget kind appeared more than once in an ordering.
    DuplicateKind { kind: WidgetKind },
    /// A store replaced its file with defaults.
    RecoveredDefaults { path: PathBuf, reason: RecoveryReason },
}

/// Cloneable handle for emitting diagnostic events.
///
/// Components hold a `Diagnostics` and call [`emit`](Self::emit) when they
/// drop or default something. Every emission also produces a `tracing` debug
/// line, so a disabled handle still leaves a trail in the logs.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    tx: Option<Sender<DiagEvent>>,
}

impl Diagnostics {
    /// A handle that only logs; events are not collected anywhere.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// A handle paired with a receiver that collects every emitted event.
    pub fn channel() -> (Self, Receiver<DiagEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub(crate) fn emit(&self, event: DiagEvent) {
        tracing::debug!(?event, "normalization diagnostic");
        if let Some(tx) = &self.tx {
            // A dropped receiver is not an error; the emitting side keeps going.
            let _ = tx.send(event);
        }
    }
}
