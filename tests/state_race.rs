//! Makes the cross-widget read-modify-write race observable.
//!
//! Each stateful widget loads the full record on its own schedule, mutates
//! its own block, and saves the full record. Two widgets whose timers fire
//! in close succession can each load the pre-mutation record; the second
//! save then silently discards the first widget's change. This is an
//! accepted last-writer-wins property of the design, and these tests pin it
//! down so a future change to the contract is a conscious one.

use tempfile::TempDir;

use focusboard::{Diagnostics, StateStore};

#[test]
fn interleaved_full_record_saves_lose_the_first_writers_change() {
    let dir = TempDir::new().expect("tempdir");
    let store = StateStore::new(dir.path().join("state.json"), Diagnostics::disabled());
    store.load().expect("seed the file");

    // Both "widgets" load the pre-mutation record in the same tick.
    let mut break_widget_copy = store.load().expect("break widget load");
    let mut hydration_widget_copy = store.load().expect("hydration widget load");

    break_widget_copy.break_reminder.break_count_today = 1;
    store.save(&break_widget_copy).expect("break widget save");

    hydration_widget_copy.hydration_reminder.water_intake_today = 2;
    store
        .save(&hydration_widget_copy)
        .expect("hydration widget save");

    let result = store.load().expect("final load");
    assert_eq!(
        result.hydration_reminder.water_intake_today, 2,
        "second writer's change survives"
    );
    assert_eq!(
        result.break_reminder.break_count_today, 0,
        "first writer's change is silently discarded: last writer wins \
         over the whole record, not per block"
    );
}

#[test]
fn update_cycles_avoid_the_race_when_not_interleaved() {
    let dir = TempDir::new().expect("tempdir");
    let store = StateStore::new(dir.path().join("state.json"), Diagnostics::disabled());

    // The same two mutations, each as a complete read-modify-write cycle.
    store
        .update(|state| state.break_reminder.break_count_today = 1)
        .expect("break widget update");
    store
        .update(|state| state.hydration_reminder.water_intake_today = 2)
        .expect("hydration widget update");

    let result = store.load().expect("final load");
    assert_eq!(result.break_reminder.break_count_today, 1);
    assert_eq!(result.hydration_reminder.water_intake_today, 2);
}

#[test]
fn stale_copy_clobbers_even_its_own_block() {
    let dir = TempDir::new().expect("tempdir");
    let store = StateStore::new(dir.path().join("state.json"), Diagnostics::disabled());

    let stale = store.load().expect("stale load");
    store
        .update(|state| state.pomodoro_cycles.cycles_today = 9)
        .expect("fresh update");

    // Saving the stale copy rolls the counter back. This is exactly why the
    // contract demands a fresh load before every mutation.
    store.save(&stale).expect("stale save");
    assert_eq!(
        store.load().expect("final load").pomodoro_cycles.cycles_today,
        0
    );
}
