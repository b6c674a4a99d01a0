//! Defensive field-by-field parsing of the state record from untrusted JSON.
//!
//! Each block and the todo list parses independently from its own sub-key: a
//! malformed field falls back to its zero-value without invalidating
//! siblings. Scalar coercion is deliberately permissive so that hand-edited
//! files survive a round of quoting mistakes.

use serde_json::{Map, Value};

use crate::state::schema::{
    BreakReminderState, DistractionBlockerState, FocusStreakState, HydrationReminderState,
    PomodoroCyclesState, StateRecord, TodoItem,
};

/// Builds a complete record from a top-level JSON object. Never fails.
pub(crate) fn parse_state(data: &Map<String, Value>) -> StateRecord {
    StateRecord {
        todos: parse_todos(data.get("todos")),
        break_reminder: parse_break_reminder(block(data, "break_reminder")),
        focus_streak: parse_focus_streak(block(data, "focus_streak")),
        distraction_blocker: parse_distraction_blocker(block(data, "distraction_blocker")),
        hydration_reminder: parse_hydration_reminder(block(data, "hydration_reminder")),
        pomodoro_cycles: parse_pomodoro_cycles(block(data, "pomodoro_cycles")),
    }
}

fn block<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    data.get(key).and_then(Value::as_object)
}

/// Entries with missing or empty text are dropped, not kept with a blank
/// label. A bare string is shorthand for `{text, done: false}`.
fn parse_todos(value: Option<&Value>) -> Vec<TodoItem> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    let mut todos = Vec::new();
    for item in items {
        match item {
            Value::Object(entry) => {
                let text = coerce_string(entry.get("text"), "");
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                todos.push(TodoItem {
                    text: text.to_string(),
                    done: coerce_bool(entry.get("done"), false),
                });
            }
            Value::String(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    todos.push(TodoItem::new(text));
                }
            }
            _ => {}
        }
    }
    todos
}

fn parse_break_reminder(block: Option<&Map<String, Value>>) -> BreakReminderState {
    let Some(fields) = block else {
        return BreakReminderState::default();
    };
    BreakReminderState {
        last_break_time: coerce_string(fields.get("last_break_time"), ""),
        break_count_today: coerce_int(fields.get("break_count_today"), 0),
    }
}

fn parse_focus_streak(block: Option<&Map<String, Value>>) -> FocusStreakState {
    let Some(fields) = block else {
        return FocusStreakState::default();
    };
    FocusStreakState {
        current_streak: coerce_int(fields.get("current_streak"), 0),
        best_streak: coerce_int(fields.get("best_streak"), 0),
        last_session_date: coerce_string(fields.get("last_session_date"), ""),
        sessions_completed: coerce_int(fields.get("sessions_completed"), 0),
    }
}

fn parse_distraction_blocker(block: Option<&Map<String, Value>>) -> DistractionBlockerState {
    let Some(fields) = block else {
        return DistractionBlockerState::default();
    };
    DistractionBlockerState {
        is_active: coerce_bool(fields.get("is_active"), false),
        blocked_until: coerce_string(fields.get("blocked_until"), ""),
        block_reason: coerce_string(fields.get("block_reason"), ""),
    }
}

fn parse_hydration_reminder(block: Option<&Map<String, Value>>) -> HydrationReminderState {
    let Some(fields) = block else {
        return HydrationReminderState::default();
    };
    HydrationReminderState {
        last_water_time: coerce_string(fields.get("last_water_time"), ""),
        water_intake_today: coerce_int(fields.get("water_intake_today"), 0),
    }
}

fn parse_pomodoro_cycles(block: Option<&Map<String, Value>>) -> PomodoroCyclesState {
    let Some(fields) = block else {
        return PomodoroCyclesState::default();
    };
    PomodoroCyclesState {
        cycles_today: coerce_int(fields.get("cycles_today"), 0),
        last_cycle_date: coerce_string(fields.get("last_cycle_date"), ""),
        total_focus_time_minutes: coerce_int(fields.get("total_focus_time_minutes"), 0),
    }
}

// ---------------------------------------------------------------------------
// Scalar coercion
// ---------------------------------------------------------------------------

/// String conversion: numbers and booleans render to text, other shapes fall
/// back.
fn coerce_string(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => fallback.to_string(),
    }
}

/// Integer conversion: floats truncate, numeric strings parse, booleans map
/// to 0/1, anything else falls back.
fn coerce_int(value: Option<&Value>, fallback: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(fallback),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(fallback),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => fallback,
    }
}

/// Boolean conversion by truthiness: non-zero numbers and non-empty strings,
/// arrays, and objects are true.
fn coerce_bool(value: Option<&Value>, fallback: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(fallback),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Null) | None => fallback,
    }
}
