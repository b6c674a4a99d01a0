//! Closed enumerations of widget kinds, display slots, and layout modes.
//!
//! The registry is the single source of truth for which tokens may appear in
//! persisted configuration. The sets are fixed at build time: a token outside
//! them is treated as absent by the normalizers, never stored as a new kind
//! or slot.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Widget kinds
// ---------------------------------------------------------------------------

/// The kind of content shown in a display slot.
///
/// A closed enumeration. [`WidgetKind::Blank`] is the sentinel meaning
/// "slot intentionally empty"; every other kind names a concrete widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetKind {
    University,
    Metrics,
    Todo,
    FocusTimer,
    Logs,
    /// Sentinel: the slot is intentionally empty.
    Blank,
    BreakReminder,
    FocusStreak,
    DistractionBlocker,
    HydrationReminder,
    PomodoroCycles,
    Calendar,
    Weather,
    HabitTracker,
    MotivationalQuote,
    SystemStats,
    Countdown,
    StickyNotes,
    MediaControls,
    FocusMusic,
    GithubNotifications,
}

impl WidgetKind {
    /// Every widget kind, in enumeration order.
    pub const ALL: [WidgetKind; 21] = [
        WidgetKind::University,
        WidgetKind::Metrics,
        WidgetKind::Todo,
        WidgetKind::FocusTimer,
        WidgetKind::Logs,
        WidgetKind::Blank,
        WidgetKind::BreakReminder,
        WidgetKind::FocusStreak,
        WidgetKind::DistractionBlocker,
        WidgetKind::HydrationReminder,
        WidgetKind::PomodoroCycles,
        WidgetKind::Calendar,
        WidgetKind::Weather,
        WidgetKind::HabitTracker,
        WidgetKind::MotivationalQuote,
        WidgetKind::SystemStats,
        WidgetKind::Countdown,
        WidgetKind::StickyNotes,
        WidgetKind::MediaControls,
        WidgetKind::FocusMusic,
        WidgetKind::GithubNotifications,
    ];

    /// The sentinel kind meaning "slot intentionally empty".
    pub const fn empty() -> Self {
        WidgetKind::Blank
    }

    /// Whether this kind is the empty sentinel.
    pub const fn is_empty(self) -> bool {
        matches!(self, WidgetKind::Blank)
    }

    /// The wire token used in persisted JSON.
    pub const fn token(self) -> &'static str {
        match self {
            WidgetKind::University => "university",
            WidgetKind::Metrics => "metrics",
            WidgetKind::Todo => "todo",
            WidgetKind::FocusTimer => "focus_timer",
            WidgetKind::Logs => "logs",
            WidgetKind::Blank => "blank",
            WidgetKind::BreakReminder => "break_reminder",
            WidgetKind::FocusStreak => "focus_streak",
            WidgetKind::DistractionBlocker => "distraction_blocker",
            WidgetKind::HydrationReminder => "hydration_reminder",
            WidgetKind::PomodoroCycles => "pomodoro_cycles",
            WidgetKind::Calendar => "calendar",
            WidgetKind::Weather => "weather",
            WidgetKind::HabitTracker => "habit_tracker",
            WidgetKind::MotivationalQuote => "motivational_quote",
            WidgetKind::SystemStats => "system_stats",
            WidgetKind::Countdown => "countdown",
            WidgetKind::StickyNotes => "sticky_notes",
            WidgetKind::MediaControls => "media_controls",
            WidgetKind::FocusMusic => "focus_music",
            WidgetKind::GithubNotifications => "github_notifications",
        }
    }

    /// Parses a wire token. Unknown tokens yield `None`; user input can
    /// never mint a new kind.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.token() == token)
    }

    /// Whether a token names a member of the enumeration.
    pub fn is_valid_token(token: &str) -> bool {
        Self::from_token(token).is_some()
    }

    /// Every kind a stacked layout can display: [`WidgetKind::ALL`] minus
    /// the empty sentinel, in enumeration order.
    pub fn stackable() -> impl Iterator<Item = WidgetKind> {
        Self::ALL.iter().copied().filter(|kind| !kind.is_empty())
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for WidgetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for WidgetKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl Visitor<'_> for TokenVisitor {
            type Value = WidgetKind;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a widget kind token")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<WidgetKind, E> {
                WidgetKind::from_token(value)
                    .ok_or_else(|| E::custom(format!("unknown widget kind: {value}")))
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// A fixed, named position in the display layout.
///
/// Covers both layout modes; which slots are actually addressable depends on
/// the active [`LayoutMode`]. The declaration order is the display order
/// within each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    TopLeft,
    TopRight,
    MidLeft,
    BottomLeft,
    BottomRight,
    Slot1,
    Slot2,
    Slot3,
    Slot4,
    Slot5,
    Slot6,
}

impl Slot {
    /// The wire token used as a JSON object key.
    pub const fn token(self) -> &'static str {
        match self {
            Slot::TopLeft => "top_left",
            Slot::TopRight => "top_right",
            Slot::MidLeft => "mid_left",
            Slot::BottomLeft => "bottom_left",
            Slot::BottomRight => "bottom_right",
            Slot::Slot1 => "slot_1",
            Slot::Slot2 => "slot_2",
            Slot::Slot3 => "slot_3",
            Slot::Slot4 => "slot_4",
            Slot::Slot5 => "slot_5",
            Slot::Slot6 => "slot_6",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Layout modes
// ---------------------------------------------------------------------------

/// The arrangement pattern of the board window.
///
/// Slot sets are mutually exclusive per mode: a configuration built for one
/// mode is not valid input for the other without remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// 2 columns x 3 rows with a fixed blank at mid-right: five named slots.
    Grid,
    /// Single column of six numbered slots, stacked top to bottom.
    Column,
}

/// Slots of the grid mode, in display order.
const GRID_SLOTS: [Slot; 5] = [
    Slot::TopLeft,
    Slot::TopRight,
    Slot::MidLeft,
    Slot::BottomLeft,
    Slot::BottomRight,
];

/// Slots of the column mode, top to bottom.
const COLUMN_SLOTS: [Slot; 6] = [
    Slot::Slot1,
    Slot::Slot2,
    Slot::Slot3,
    Slot::Slot4,
    Slot::Slot5,
    Slot::Slot6,
];

impl LayoutMode {
    /// The ordered slot set of this mode.
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            LayoutMode::Grid => &GRID_SLOTS,
            LayoutMode::Column => &COLUMN_SLOTS,
        }
    }

    /// Whether the slot belongs to this mode.
    pub fn is_valid_slot(self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }

    /// Parses a slot token against this mode's slot set. Tokens of the other
    /// mode (or anything else) yield `None`.
    pub fn slot_from_token(self, token: &str) -> Option<Slot> {
        self.slots().iter().copied().find(|slot| slot.token() == token)
    }

    /// Short name used in log lines.
    pub const fn token(self) -> &'static str {
        match self {
            LayoutMode::Grid => "grid",
            LayoutMode::Column => "column",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
