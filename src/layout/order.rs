//! Widget ordering for stacked layout modes.
//!
//! Modes that stack widgets by priority instead of addressing them by slot
//! consume a [`WidgetOrder`]: every stackable kind exactly once, user
//! preference first, enumeration order for the rest.

use serde::Serialize;
use serde_json::Value;

use crate::diag::{DiagEvent, Diagnostics};
use crate::registry::WidgetKind;

/// An ordered widget sequence with no duplicates, covering every stackable
/// kind.
///
/// Instances come from [`Default`] or [`normalize_order`], both of which
/// uphold the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetOrder(Vec<WidgetKind>);

impl WidgetOrder {
    /// The kinds in display priority order.
    pub fn as_slice(&self) -> &[WidgetKind] {
        &self.0
    }

    /// Iterates kinds in display priority order.
    pub fn iter(&self) -> impl Iterator<Item = WidgetKind> + '_ {
        self.0.iter().copied()
    }

    /// The order as a JSON array of kind tokens, the shape persisted in the
    /// configuration record.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Default for WidgetOrder {
    /// Full enumeration minus the empty sentinel, in enumeration order.
    fn default() -> Self {
        Self(WidgetKind::stackable().collect())
    }
}

/// Produces a complete, duplicate-free ordering from arbitrary input.
///
/// Non-array input yields the default order. Array input is scanned left to
/// right: each element that is a valid kind token and not yet kept is
/// appended (first occurrence wins); everything else is dropped silently.
/// Missing stackable kinds are appended in enumeration order, so the result
/// always covers the whole enumeration. Never fails.
pub fn normalize_order(input: Option<&Value>, diag: &Diagnostics) -> WidgetOrder {
    let Some(Value::Array(items)) = input else {
        return WidgetOrder::default();
    };

    let mut kept: Vec<WidgetKind> = Vec::new();
    for item in items {
        let Value::String(token) = item else {
            continue;
        };
        match WidgetKind::from_token(token) {
            Some(kind) if kept.contains(&kind) => diag.emit(DiagEvent::DuplicateKind { kind }),
            Some(kind) => kept.push(kind),
            None => diag.emit(DiagEvent::UnknownKind {
                token: token.clone(),
            }),
        }
    }

    for kind in WidgetKind::stackable() {
        if !kept.contains(&kind) {
            kept.push(kind);
        }
    }

    WidgetOrder(kept)
}
