//! Persisted application state: the todo list and the per-widget state
//! blocks, with defensive loading and a self-healing store.

mod parse;
mod schema;
mod store;

pub use schema::{
    BreakReminderState, DistractionBlockerState, FocusStreakState, HydrationReminderState,
    PomodoroCyclesState, StateRecord, TodoItem,
};
pub use store::StateStore;
