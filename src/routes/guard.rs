//! The navigation guard: one pure decision for every routed path.
//!
//! DESIGN
//! ======
//! `decide` is a function of `(path, session)` with no state of its own;
//! it never mutates the session. The single reactive adapter in
//! `SessionProvider` applies its verdict, so public pages, auth pages, and
//! the three role areas all share one guard instead of one per routing
//! surface. Until bootstrap resolves, the verdict is `Wait` — no redirect
//! may fire before the session is actually known.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::urlenc;

/// Path of the sign-in page.
pub const LOGIN_PATH: &str = "/auth/login";

/// Access requirement of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Anyone, signed in or not.
    Public,
    /// Only sensible while signed out (sign-in, registration).
    AuthOnly,
    /// Requires a session; `Some(role)` additionally pins the area to one
    /// role.
    Protected(Option<Role>),
}

/// Verdict for a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Bootstrap has not resolved; render the neutral loading view and
    /// decide again once it has.
    Wait,
    Redirect(String),
}

/// Classify a path into its access requirement.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if path == "/auth" || path.starts_with("/auth/") {
        RouteClass::AuthOnly
    } else if path == "/app" || path.starts_with("/app/") || path == "/dashboard" {
        RouteClass::Protected(None)
    } else if path == "/employer" || path.starts_with("/employer/") {
        RouteClass::Protected(Some(Role::Employer))
    } else if path == "/admin" || path.starts_with("/admin/") {
        RouteClass::Protected(Some(Role::Admin))
    } else {
        RouteClass::Public
    }
}

/// Default landing page for a role, used after sign-in and when bouncing
/// an authenticated user off an auth-only or wrong-role page.
#[must_use]
pub fn landing(role: Role) -> &'static str {
    match role {
        Role::JobSeeker => "/",
        Role::Employer => "/employer/dashboard",
        Role::Admin => "/admin",
        Role::Unknown => "/dashboard",
    }
}

/// Build the login path carrying the original destination.
#[must_use]
pub fn login_redirect(path: &str) -> String {
    if path.is_empty() || path == "/" {
        LOGIN_PATH.to_owned()
    } else {
        format!(
            "{LOGIN_PATH}?{}={}",
            urlenc::REDIRECT_PARAM,
            urlenc::encode_component(path)
        )
    }
}

/// Decide whether the session may see `path`.
#[must_use]
pub fn decide(path: &str, session: &SessionState) -> Access {
    if !session.is_initialized() {
        return Access::Wait;
    }

    match classify(path) {
        RouteClass::Public => Access::Allow,
        RouteClass::AuthOnly => match session.role() {
            // Already signed in: bounce to the role's landing page, never
            // back onto an auth path.
            Some(role) => Access::Redirect(landing(role).to_owned()),
            None => Access::Allow,
        },
        RouteClass::Protected(required) => match session.role() {
            None => Access::Redirect(login_redirect(path)),
            Some(role) => match required {
                Some(required_role) if role != required_role => {
                    // Wrong area for this role: land them on their own
                    // dashboard instead of showing an error.
                    Access::Redirect(landing(role).to_owned())
                }
                _ => Access::Allow,
            },
        },
    }
}
