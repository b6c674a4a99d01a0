//! State record schema: the todo list plus five independent widget state
//! blocks.
//!
//! Each block is a flat record of primitive fields. Timestamps are ISO-8601
//! strings with the empty string meaning "never". Every block's `Default` is
//! its zero-value and is a valid, displayable state, never an error state.
//! No field in one block is derived from another.

use serde::Serialize;

/// One todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// Non-empty, trimmed label.
    pub text: String,
    /// Whether the entry is checked off.
    pub done: bool,
}

impl TodoItem {
    /// A fresh, unchecked entry.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Break reminder bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BreakReminderState {
    /// ISO-8601 timestamp of the last break; empty = never.
    pub last_break_time: String,
    /// Breaks taken today.
    pub break_count_today: i64,
}

/// Focus streak counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FocusStreakState {
    /// Consecutive days with at least one completed session.
    pub current_streak: i64,
    /// Best streak ever reached.
    pub best_streak: i64,
    /// ISO date of the last counted session; empty = never.
    pub last_session_date: String,
    /// Total sessions completed.
    pub sessions_completed: i64,
}

/// Distraction blocker status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistractionBlockerState {
    /// Whether a block is currently active.
    pub is_active: bool,
    /// ISO-8601 timestamp the block runs until; empty = no block.
    pub blocked_until: String,
    /// Free-text reason shown while blocking.
    pub block_reason: String,
}

/// Hydration reminder bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HydrationReminderState {
    /// ISO-8601 timestamp of the last glass; empty = never.
    pub last_water_time: String,
    /// Glasses drunk today.
    pub water_intake_today: i64,
}

/// Pomodoro cycle counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomodoroCyclesState {
    /// Cycles completed today.
    pub cycles_today: i64,
    /// ISO date of the last cycle; empty = never.
    pub last_cycle_date: String,
    /// Accumulated focus minutes.
    pub total_focus_time_minutes: i64,
}

/// The whole persisted state record.
///
/// Widgets mutating one block must follow the read-modify-write contract
/// documented on [`StateStore`](crate::state::StateStore): load the full
/// current record, mutate only their own block, save the full record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateRecord {
    pub todos: Vec<TodoItem>,
    pub break_reminder: BreakReminderState,
    pub focus_streak: FocusStreakState,
    pub distraction_blocker: DistractionBlockerState,
    pub hydration_reminder: HydrationReminderState,
    pub pomodoro_cycles: PomodoroCyclesState,
}
