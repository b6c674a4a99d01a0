//! The layout mapping type and its total normalization routine.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::diag::{DiagEvent, Diagnostics};
use crate::layout::presets;
use crate::registry::{LayoutMode, Slot, WidgetKind};

/// A total assignment of one widget kind to every slot of one layout mode.
///
/// Invariant: the key set always equals the mode's slot set and every value
/// is a member of the widget-kind enumeration. Instances can only be built
/// through [`default_for`](Self::default_for), the preset table, or
/// [`normalize_layout`], all of which uphold the invariant; [`set`](Self::set)
/// refuses slots outside the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMapping {
    mode: LayoutMode,
    slots: BTreeMap<Slot, WidgetKind>,
}

impl LayoutMapping {
    /// The built-in default mapping of a mode.
    pub fn default_for(mode: LayoutMode) -> Self {
        Self::from_entries(mode, presets::default_entries(mode))
    }

    pub(crate) fn from_entries(mode: LayoutMode, entries: &[(Slot, WidgetKind)]) -> Self {
        debug_assert_eq!(entries.len(), mode.slots().len());
        Self {
            mode,
            slots: entries.iter().copied().collect(),
        }
    }

    /// The layout mode this mapping was built for.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// The kind assigned to a slot, or `None` for slots outside the mode.
    pub fn kind_at(&self, slot: Slot) -> Option<WidgetKind> {
        self.slots.get(&slot).copied()
    }

    /// Reassigns a slot. Returns `false` (and changes nothing) when the slot
    /// does not belong to this mapping's mode.
    pub fn set(&mut self, slot: Slot, kind: WidgetKind) -> bool {
        if !self.mode.is_valid_slot(slot) {
            return false;
        }
        self.slots.insert(slot, kind);
        true
    }

    /// Iterates slot assignments in the mode's display order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, WidgetKind)> + '_ {
        self.slots.iter().map(|(slot, kind)| (*slot, *kind))
    }

    /// The mapping as a JSON object of slot tokens to kind tokens, the shape
    /// persisted in the configuration record.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for LayoutMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (slot, kind) in &self.slots {
            map.serialize_entry(slot.token(), kind.token())?;
        }
        map.end()
    }
}

/// Produces a complete, valid mapping for `mode` from arbitrary input.
///
/// - A string naming a preset of `mode` starts from that preset; an unknown
///   preset name falls back to the mode default.
/// - An object overlays the start mapping: for each key naming a slot of the
///   mode whose value is a valid kind token, that kind wins; everything else
///   keeps the start value.
/// - Any other shape (absent, null, number, array, ...) yields the mode
///   default unchanged.
///
/// Never fails. Dropped tokens surface on the diagnostics channel only.
pub fn normalize_layout(input: Option<&Value>, mode: LayoutMode, diag: &Diagnostics) -> LayoutMapping {
    let mut merged = match input {
        Some(Value::String(name)) => match presets::preset(mode, name) {
            Some(mapping) => mapping,
            None => {
                if !name.is_empty() {
                    diag.emit(DiagEvent::UnknownPreset {
                        mode,
                        name: name.clone(),
                    });
                }
                LayoutMapping::default_for(mode)
            }
        },
        _ => LayoutMapping::default_for(mode),
    };

    if let Some(Value::Object(overlay)) = input {
        for (key, value) in overlay {
            let Some(slot) = mode.slot_from_token(key) else {
                diag.emit(DiagEvent::UnknownSlot {
                    mode,
                    token: key.clone(),
                });
                continue;
            };
            match value {
                Value::String(token) => match WidgetKind::from_token(token) {
                    Some(kind) => {
                        merged.set(slot, kind);
                    }
                    None => diag.emit(DiagEvent::UnknownKind {
                        token: token.clone(),
                    }),
                },
                // Non-string values keep the start mapping's kind.
                _ => {}
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn totality_holds(mapping: &LayoutMapping, mode: LayoutMode) {
        for slot in mode.slots() {
            assert!(
                mapping.kind_at(*slot).is_some(),
                "slot {slot} must be populated"
            );
        }
        assert_eq!(mapping.iter().count(), mode.slots().len());
    }

    #[test]
    fn no_input_yields_the_default() {
        let diag = Diagnostics::disabled();
        for mode in [LayoutMode::Grid, LayoutMode::Column] {
            let mapping = normalize_layout(None, mode, &diag);
            assert_eq!(mapping, LayoutMapping::default_for(mode));
            totality_holds(&mapping, mode);
        }
    }

    #[test]
    fn total_for_any_input_shape() {
        let diag = Diagnostics::disabled();
        let inputs = [
            json!(null),
            json!(""),
            json!("no_such_preset"),
            json!("productivity_2col"),
            json!(42),
            json!([1, 2, 3]),
            json!({}),
            json!({"top_left": "metrics", "slot_9": "bogus", "mid_left": 7}),
        ];
        for mode in [LayoutMode::Grid, LayoutMode::Column] {
            for input in &inputs {
                totality_holds(&normalize_layout(Some(input), mode, &diag), mode);
            }
        }
    }

    #[test]
    fn known_preset_name_selects_the_preset() {
        let diag = Diagnostics::disabled();
        let mapping = normalize_layout(Some(&json!("metrics_focus")), LayoutMode::Grid, &diag);
        assert_eq!(mapping.kind_at(Slot::TopLeft), Some(WidgetKind::Metrics));
        assert_eq!(
            mapping.kind_at(Slot::BottomRight),
            Some(WidgetKind::University)
        );
    }

    #[test]
    fn unknown_preset_name_degrades_to_default_with_diagnostic() {
        let (diag, rx) = Diagnostics::channel();
        let mapping = normalize_layout(Some(&json!("no_such_preset")), LayoutMode::Grid, &diag);
        assert_eq!(mapping, LayoutMapping::default_for(LayoutMode::Grid));
        assert_eq!(
            rx.try_recv().expect("diagnostic expected"),
            DiagEvent::UnknownPreset {
                mode: LayoutMode::Grid,
                name: "no_such_preset".to_string()
            }
        );
    }

    #[test]
    fn empty_string_is_no_input_not_an_unknown_preset() {
        let (diag, rx) = Diagnostics::channel();
        let mapping = normalize_layout(Some(&json!("")), LayoutMode::Grid, &diag);
        assert_eq!(mapping, LayoutMapping::default_for(LayoutMode::Grid));
        assert!(rx.try_recv().is_err(), "no diagnostic for empty string");
    }

    #[test]
    fn overlay_keeps_defaults_for_unsupplied_slots() {
        let diag = Diagnostics::disabled();
        let input = json!({"top_left": "metrics", "invalid": "unknown"});
        let mapping = normalize_layout(Some(&input), LayoutMode::Grid, &diag);
        assert_eq!(mapping.kind_at(Slot::TopLeft), Some(WidgetKind::Metrics));
        assert_eq!(mapping.kind_at(Slot::TopRight), Some(WidgetKind::Metrics));
        assert_eq!(mapping.kind_at(Slot::MidLeft), Some(WidgetKind::Todo));
    }

    #[test]
    fn column_overlay_scenario() {
        // Input {"slot_1": "metrics", "slot_9": "bogus"} -> default with only
        // slot_1 overridden; slot_9 discarded.
        let (diag, rx) = Diagnostics::channel();
        let input = json!({"slot_1": "metrics", "slot_9": "bogus"});
        let mapping = normalize_layout(Some(&input), LayoutMode::Column, &diag);

        assert_eq!(mapping.kind_at(Slot::Slot1), Some(WidgetKind::Metrics));
        let default = LayoutMapping::default_for(LayoutMode::Column);
        for slot in &LayoutMode::Column.slots()[1..] {
            assert_eq!(mapping.kind_at(*slot), default.kind_at(*slot));
        }
        assert_eq!(
            rx.try_recv().expect("diagnostic expected"),
            DiagEvent::UnknownSlot {
                mode: LayoutMode::Column,
                token: "slot_9".to_string()
            }
        );
    }

    #[test]
    fn unknown_kind_token_keeps_the_default_value() {
        let (diag, rx) = Diagnostics::channel();
        let input = json!({"top_left": "not_a_widget"});
        let mapping = normalize_layout(Some(&input), LayoutMode::Grid, &diag);
        assert_eq!(
            mapping.kind_at(Slot::TopLeft),
            Some(WidgetKind::University)
        );
        assert_eq!(
            rx.try_recv().expect("diagnostic expected"),
            DiagEvent::UnknownKind {
                token: "not_a_widget".to_string()
            }
        );
    }

    #[test]
    fn non_string_slot_value_keeps_the_default_value() {
        let diag = Diagnostics::disabled();
        let input = json!({"top_left": 42, "top_right": null});
        let mapping = normalize_layout(Some(&input), LayoutMode::Grid, &diag);
        assert_eq!(mapping, LayoutMapping::default_for(LayoutMode::Grid));
    }

    #[test]
    fn other_modes_slots_are_rejected() {
        let diag = Diagnostics::disabled();
        let input = json!({"slot_1": "metrics"});
        let mapping = normalize_layout(Some(&input), LayoutMode::Grid, &diag);
        assert_eq!(mapping, LayoutMapping::default_for(LayoutMode::Grid));
    }

    #[test]
    fn normalization_is_idempotent() {
        let diag = Diagnostics::disabled();
        let inputs = [
            json!("adhd_focus"),
            json!({"top_left": "weather", "bottom_right": "blank"}),
            json!(null),
        ];
        for input in &inputs {
            let once = normalize_layout(Some(input), LayoutMode::Grid, &diag);
            let twice = normalize_layout(Some(&once.to_value()), LayoutMode::Grid, &diag);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn set_refuses_foreign_slots() {
        let mut mapping = LayoutMapping::default_for(LayoutMode::Grid);
        assert!(!mapping.set(Slot::Slot1, WidgetKind::Weather));
        assert!(mapping.set(Slot::TopLeft, WidgetKind::Weather));
        assert_eq!(mapping.kind_at(Slot::TopLeft), Some(WidgetKind::Weather));
        assert_eq!(mapping.kind_at(Slot::Slot1), None);
    }

    #[test]
    fn serializes_as_token_object() {
        let mapping = LayoutMapping::default_for(LayoutMode::Grid);
        let value = mapping.to_value();
        assert_eq!(value["top_left"], json!("university"));
        assert_eq!(value["bottom_right"], json!("logs"));
        assert_eq!(
            value.as_object().expect("object").len(),
            LayoutMode::Grid.slots().len()
        );
    }
}
