//! Built-in preset table: named, complete slot-to-kind mappings per mode.
//!
//! Presets are one-shot layout choices offered by the settings dialog. Each
//! entry covers every slot of its mode; the first preset of each mode is
//! also that mode's default mapping.

use crate::layout::normalize::LayoutMapping;
use crate::registry::{LayoutMode, Slot, WidgetKind};

type Entries = &'static [(Slot, WidgetKind)];

const GRID_PRODUCTIVITY: Entries = &[
    (Slot::TopLeft, WidgetKind::University),
    (Slot::TopRight, WidgetKind::Metrics),
    (Slot::MidLeft, WidgetKind::Todo),
    (Slot::BottomLeft, WidgetKind::FocusTimer),
    (Slot::BottomRight, WidgetKind::Logs),
];

const GRID_METRICS_FOCUS: Entries = &[
    (Slot::TopLeft, WidgetKind::Metrics),
    (Slot::TopRight, WidgetKind::FocusTimer),
    (Slot::MidLeft, WidgetKind::Todo),
    (Slot::BottomLeft, WidgetKind::Logs),
    (Slot::BottomRight, WidgetKind::University),
];

const GRID_MINIMAL: Entries = &[
    (Slot::TopLeft, WidgetKind::Metrics),
    (Slot::TopRight, WidgetKind::Logs),
    (Slot::MidLeft, WidgetKind::Todo),
    (Slot::BottomLeft, WidgetKind::Blank),
    (Slot::BottomRight, WidgetKind::Blank),
];

const GRID_STUDY_MODE: Entries = &[
    (Slot::TopLeft, WidgetKind::University),
    (Slot::TopRight, WidgetKind::FocusTimer),
    (Slot::MidLeft, WidgetKind::Todo),
    (Slot::BottomLeft, WidgetKind::Metrics),
    (Slot::BottomRight, WidgetKind::Logs),
];

const GRID_SYSTEM_MONITOR: Entries = &[
    (Slot::TopLeft, WidgetKind::Metrics),
    (Slot::TopRight, WidgetKind::Logs),
    (Slot::MidLeft, WidgetKind::Metrics),
    (Slot::BottomLeft, WidgetKind::Logs),
    (Slot::BottomRight, WidgetKind::Blank),
];

const GRID_ADHD_FOCUS: Entries = &[
    (Slot::TopLeft, WidgetKind::FocusStreak),
    (Slot::TopRight, WidgetKind::BreakReminder),
    (Slot::MidLeft, WidgetKind::HydrationReminder),
    (Slot::BottomLeft, WidgetKind::PomodoroCycles),
    (Slot::BottomRight, WidgetKind::DistractionBlocker),
];

const COLUMN_PRODUCTIVITY: Entries = &[
    (Slot::Slot1, WidgetKind::FocusTimer),
    (Slot::Slot2, WidgetKind::Metrics),
    (Slot::Slot3, WidgetKind::University),
    (Slot::Slot4, WidgetKind::Todo),
    (Slot::Slot5, WidgetKind::Logs),
    (Slot::Slot6, WidgetKind::Blank),
];

const COLUMN_ADHD: Entries = &[
    (Slot::Slot1, WidgetKind::FocusStreak),
    (Slot::Slot2, WidgetKind::BreakReminder),
    (Slot::Slot3, WidgetKind::HydrationReminder),
    (Slot::Slot4, WidgetKind::PomodoroCycles),
    (Slot::Slot5, WidgetKind::DistractionBlocker),
    (Slot::Slot6, WidgetKind::Todo),
];

/// Preset tables per mode; the first entry of each table is the mode default.
const GRID_PRESETS: &[(&str, Entries)] = &[
    ("productivity_2col", GRID_PRODUCTIVITY),
    ("metrics_focus", GRID_METRICS_FOCUS),
    ("minimal", GRID_MINIMAL),
    ("study_mode", GRID_STUDY_MODE),
    ("system_monitor", GRID_SYSTEM_MONITOR),
    ("adhd_focus", GRID_ADHD_FOCUS),
];

const COLUMN_PRESETS: &[(&str, Entries)] = &[
    ("productivity_column", COLUMN_PRODUCTIVITY),
    ("adhd_column", COLUMN_ADHD),
];

fn table(mode: LayoutMode) -> &'static [(&'static str, Entries)] {
    match mode {
        LayoutMode::Grid => GRID_PRESETS,
        LayoutMode::Column => COLUMN_PRESETS,
    }
}

/// Looks up a named preset for a mode. Unknown names yield `None`.
pub fn preset(mode: LayoutMode, name: &str) -> Option<LayoutMapping> {
    table(mode)
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, entries)| LayoutMapping::from_entries(mode, entries))
}

/// Names of the presets offered for a mode, in presentation order.
pub fn preset_names(mode: LayoutMode) -> Vec<&'static str> {
    table(mode).iter().map(|(name, _)| *name).collect()
}

/// The default mapping entries of a mode.
pub(crate) fn default_entries(mode: LayoutMode) -> Entries {
    table(mode)[0].1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_preset_covers_its_mode_exactly() {
        for mode in [LayoutMode::Grid, LayoutMode::Column] {
            for (name, entries) in table(mode) {
                let covered: BTreeSet<Slot> = entries.iter().map(|(slot, _)| *slot).collect();
                let expected: BTreeSet<Slot> = mode.slots().iter().copied().collect();
                assert_eq!(covered, expected, "preset {name} must cover mode {mode}");
                assert_eq!(
                    entries.len(),
                    mode.slots().len(),
                    "preset {name} must assign each slot once"
                );
            }
        }
    }

    #[test]
    fn lookup_finds_known_presets() {
        let mapping = preset(LayoutMode::Grid, "adhd_focus").expect("known preset");
        assert_eq!(
            mapping.kind_at(Slot::TopLeft),
            Some(WidgetKind::FocusStreak)
        );
    }

    #[test]
    fn lookup_is_mode_scoped() {
        assert!(preset(LayoutMode::Column, "adhd_focus").is_none());
        assert!(preset(LayoutMode::Grid, "adhd_column").is_none());
    }

    #[test]
    fn unknown_name_yields_none() {
        assert!(preset(LayoutMode::Grid, "nope").is_none());
        assert!(preset(LayoutMode::Grid, "").is_none());
    }

    #[test]
    fn first_preset_is_the_default() {
        assert_eq!(
            preset(LayoutMode::Grid, "productivity_2col").expect("known preset"),
            LayoutMapping::default_for(LayoutMode::Grid)
        );
        assert_eq!(
            preset(LayoutMode::Column, "productivity_column").expect("known preset"),
            LayoutMapping::default_for(LayoutMode::Column)
        );
    }

    #[test]
    fn preset_names_lists_presentation_order() {
        let names = preset_names(LayoutMode::Grid);
        assert_eq!(names[0], "productivity_2col");
        assert_eq!(names.len(), 6);
        assert_eq!(
            preset_names(LayoutMode::Column),
            vec!["productivity_column", "adhd_column"]
        );
    }
}
