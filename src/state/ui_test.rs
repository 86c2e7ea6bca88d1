use super::*;

#[test]
fn push_assigns_unique_ids() {
    let mut state = ToastState::default();
    state.push_error("one");
    state.push_info("two");
    assert_eq!(state.toasts.len(), 2);
    assert_ne!(state.toasts[0].id, state.toasts[1].id);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    state.push_info("keep");
    state.push_info("drop");
    let drop_id = state.toasts[1].id.clone();
    state.dismiss(&drop_id);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "keep");
}

#[test]
fn queue_is_capped_dropping_oldest() {
    let mut state = ToastState::default();
    for i in 0..7 {
        state.push_info(format!("m{i}"));
    }
    assert_eq!(state.toasts.len(), 4);
    assert_eq!(state.toasts[0].message, "m3");
    assert_eq!(state.toasts[3].message, "m6");
}
