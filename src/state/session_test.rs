use super::*;
use crate::net::types::{Role, User};

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
        role,
    }
}

// =============================================================
// Defaults and getters
// =============================================================

#[test]
fn default_state_is_unstarted() {
    let state = SessionState::default();
    assert_eq!(state, SessionState::Unstarted);
    assert!(!state.is_initialized());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_iff_user_present_in_every_state() {
    let states = [
        SessionState::Unstarted,
        SessionState::Initializing,
        SessionState::Authenticated(user(Role::JobSeeker)),
        SessionState::Unauthenticated,
    ];
    for state in states {
        assert_eq!(state.is_authenticated(), state.user().is_some());
    }
}

#[test]
fn role_getter_reads_the_user() {
    let mut state = SessionState::default();
    assert!(state.role().is_none());
    state.sign_in(user(Role::Employer));
    assert_eq!(state.role(), Some(Role::Employer));
}

// =============================================================
// Bootstrap single-flight
// =============================================================

#[test]
fn begin_bootstrap_starts_exactly_once() {
    let mut state = SessionState::default();
    assert!(state.begin_bootstrap());
    assert_eq!(state, SessionState::Initializing);

    // Second caller is turned away while the first is in flight.
    assert!(!state.begin_bootstrap());
    assert_eq!(state, SessionState::Initializing);
}

#[test]
fn begin_bootstrap_is_rejected_after_resolution() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.resolve(Some(user(Role::JobSeeker)));
    assert!(!state.begin_bootstrap());
    assert!(state.is_authenticated());
}

#[test]
fn resolve_with_user_authenticates() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.resolve(Some(user(Role::Admin)));
    assert!(state.is_initialized());
    assert_eq!(state.role(), Some(Role::Admin));
}

#[test]
fn resolve_without_user_is_unauthenticated() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.resolve(None);
    assert_eq!(state, SessionState::Unauthenticated);
    assert!(state.is_initialized());
}

#[test]
fn late_resolve_does_not_clobber_sign_in() {
    let mut state = SessionState::default();
    state.begin_bootstrap();
    state.sign_in(user(Role::JobSeeker));

    // A stale who-am-I response arriving after an explicit sign-in
    // must not sign the user back out.
    state.resolve(None);
    assert!(state.is_authenticated());
}

#[test]
fn resolve_is_ignored_before_bootstrap() {
    let mut state = SessionState::default();
    state.resolve(Some(user(Role::JobSeeker)));
    assert_eq!(state, SessionState::Unstarted);
}

// =============================================================
// Sign-in / sign-out
// =============================================================

#[test]
fn sign_in_then_clear_round_trip() {
    let mut state = SessionState::default();
    state.sign_in(user(Role::Employer));
    assert!(state.is_authenticated());

    state.clear();
    assert_eq!(state, SessionState::Unauthenticated);
    assert!(state.is_initialized());
    assert!(state.user().is_none());
}

// =============================================================
// Terminal auth failures through the handle
// =============================================================

#[test]
fn absorb_expiry_clears_the_session_on_terminal_401() {
    let handle = SessionHandle::new();
    handle.sign_in(user(Role::JobSeeker));

    assert!(handle.absorb_expiry(&ApiError::SessionExpired));
    assert_eq!(handle.get_untracked(), SessionState::Unauthenticated);
}

#[test]
fn absorb_expiry_ignores_non_auth_failures() {
    let handle = SessionHandle::new();
    handle.sign_in(user(Role::Employer));

    assert!(!handle.absorb_expiry(&ApiError::Network("timeout".to_owned())));
    assert!(!handle.absorb_expiry(&ApiError::Status(503)));
    assert!(!handle.absorb_expiry(&ApiError::Decode("bad json".to_owned())));

    // A non-terminal failure must leave the active session intact.
    assert_eq!(handle.get_untracked().role(), Some(Role::Employer));
}
