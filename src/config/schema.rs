//! The configuration record: where the window goes and what widget goes in
//! which slot.

use serde::Serialize;

use crate::layout::{LayoutMapping, WidgetOrder};
use crate::registry::LayoutMode;

/// Persisted launch configuration.
///
/// Created with a sentinel display index and the default layout on first
/// run, mutated by the settings dialog, read once per process start to
/// drive window placement and widget composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRecord {
    /// Index of the display to open on; [`Self::DISPLAY_UNSET`] means "not
    /// chosen yet".
    pub display_index: i64,
    /// Slot assignments for the active layout mode.
    pub layout: LayoutMapping,
    /// Display priority for stacked layout modes.
    pub widget_order: WidgetOrder,
}

impl ConfigRecord {
    /// Sentinel display index: no display has been chosen yet.
    pub const DISPLAY_UNSET: i64 = -1;

    /// The first-run record for a mode: display unset, default layout and
    /// order.
    pub fn default_for(mode: LayoutMode) -> Self {
        Self {
            display_index: Self::DISPLAY_UNSET,
            layout: LayoutMapping::default_for(mode),
            widget_order: WidgetOrder::default(),
        }
    }

    /// Whether a display has been chosen.
    pub fn display_chosen(&self) -> bool {
        self.display_index >= 0
    }
}
