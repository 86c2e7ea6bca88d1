//! Session lifecycle state machine and the injected handle around it.
//!
//! DESIGN
//! ======
//! The session is a tagged variant rather than a set of booleans, so the
//! invalid combinations (`is_authenticated` without a user, "initialized
//! but still loading") are unrepresentable. Transitions live as methods on
//! the plain enum and are unit-tested without a reactive runtime; the
//! [`SessionHandle`] wraps them in an `RwSignal` and is provided via
//! context by `SessionProvider`, so components depend on an explicit
//! injected service instead of a hidden global.
//!
//! ORDERING
//! ========
//! `begin_bootstrap` is the re-entrancy guard: only the transition out of
//! `Unstarted` returns true, so the who-am-I request is sent at most once
//! per page load no matter how often the provider re-runs. The route guard
//! refuses to act (`Access::Wait`) until one of the two terminal bootstrap
//! states is reached.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::http::ApiError;
use crate::net::types::{Role, User};

/// Where the browser tab stands with respect to the server-side session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Page load, before anyone asked the server.
    #[default]
    Unstarted,
    /// The who-am-I request is in flight.
    Initializing,
    /// The server vouched for this user.
    Authenticated(User),
    /// The server does not know us (or could not be reached at bootstrap).
    Unauthenticated,
}

impl SessionState {
    /// True once bootstrap has resolved, in either direction.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Authenticated(_) | Self::Unauthenticated)
    }

    /// True exactly when a user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The signed-in user's role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// `Unstarted → Initializing`. Returns false (and does nothing) from
    /// any other state; this is the bootstrap re-entrancy guard.
    pub fn begin_bootstrap(&mut self) -> bool {
        if matches!(self, Self::Unstarted) {
            *self = Self::Initializing;
            true
        } else {
            false
        }
    }

    /// Resolve bootstrap: `Initializing → Authenticated | Unauthenticated`.
    /// Ignored outside `Initializing` (a late who-am-I response must not
    /// clobber an explicit sign-in or sign-out).
    pub fn resolve(&mut self, user: Option<User>) {
        if matches!(self, Self::Initializing) {
            *self = match user {
                Some(user) => Self::Authenticated(user),
                None => Self::Unauthenticated,
            };
        }
    }

    /// Record a successful sign-in or registration.
    pub fn sign_in(&mut self, user: User) {
        *self = Self::Authenticated(user);
    }

    /// Drop the user: sign-out or terminal authentication failure.
    pub fn clear(&mut self) {
        *self = Self::Unauthenticated;
    }
}

/// Injected, copyable handle to the tab-wide session state.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: RwSignal<SessionState>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Current state, tracked reactively.
    #[must_use]
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Current state without subscribing the caller.
    #[must_use]
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn sign_in(&self, user: User) {
        self.state.update(|s| s.sign_in(user));
    }

    pub fn clear(&self) {
        self.state.update(SessionState::clear);
    }

    /// Clear the session if the error is a terminal authentication failure.
    /// Returns true when it was; the route guard handles the redirect.
    pub fn absorb_expiry(&self, err: &ApiError) -> bool {
        if matches!(err, ApiError::SessionExpired) {
            leptos::logging::warn!("session expired, signing out");
            self.clear();
            true
        } else {
            false
        }
    }

    /// Run the one-time bootstrap check against `/api/auth/me`.
    ///
    /// No-op on the server (SSR renders the neutral loading shell) and on
    /// every call after the first: the `Unstarted → Initializing`
    /// transition is the single-flight guard.
    pub fn spawn_bootstrap(&self) {
        #[cfg(feature = "hydrate")]
        {
            let mut started = false;
            self.state.update(|s| started = s.begin_bootstrap());
            if !started {
                return;
            }

            let handle = *self;
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user().await {
                    Ok(user) => handle.state.update(|s| s.resolve(Some(user))),
                    Err(e) => {
                        // Network failure and 401 both resolve to signed-out
                        // at bootstrap; an active session is never cleared
                        // here because `resolve` only acts on Initializing.
                        leptos::logging::log!("bootstrap: no active session ({e})");
                        handle.state.update(|s| s.resolve(None));
                    }
                }
            });
        }
    }
}
