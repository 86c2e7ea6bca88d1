use super::*;

#[test]
fn starts_empty_and_unloaded() {
    let state = SavedJobsState::default();
    assert!(!state.loaded);
    assert!(!state.is_saved("j-1"));
}

#[test]
fn set_all_replaces_and_marks_loaded() {
    let mut state = SavedJobsState::default();
    state.mark_saved("stale");
    state.set_all(["j-1".to_owned(), "j-2".to_owned()]);
    assert!(state.loaded);
    assert!(state.is_saved("j-1"));
    assert!(!state.is_saved("stale"));
}

#[test]
fn toggle_round_trip() {
    let mut state = SavedJobsState::default();
    state.mark_saved("j-1");
    assert!(state.is_saved("j-1"));
    state.mark_unsaved("j-1");
    assert!(!state.is_saved("j-1"));
}
