use super::*;
use crate::net::types::User;

fn signed_in(role: Role) -> SessionState {
    SessionState::Authenticated(User {
        id: "u-1".to_owned(),
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
        role,
    })
}

fn signed_out() -> SessionState {
    SessionState::Unauthenticated
}

// =============================================================
// Classification
// =============================================================

#[test]
fn auth_paths_are_auth_only() {
    assert_eq!(classify("/auth/login"), RouteClass::AuthOnly);
    assert_eq!(classify("/auth/register"), RouteClass::AuthOnly);
}

#[test]
fn app_and_dashboard_paths_are_protected_for_any_role() {
    assert_eq!(classify("/app/applications"), RouteClass::Protected(None));
    assert_eq!(classify("/app/saved"), RouteClass::Protected(None));
    assert_eq!(classify("/dashboard"), RouteClass::Protected(None));
}

#[test]
fn role_areas_are_pinned() {
    assert_eq!(
        classify("/employer/dashboard"),
        RouteClass::Protected(Some(Role::Employer))
    );
    assert_eq!(classify("/admin"), RouteClass::Protected(Some(Role::Admin)));
}

#[test]
fn listings_are_public() {
    assert_eq!(classify("/"), RouteClass::Public);
    assert_eq!(classify("/jobs/42"), RouteClass::Public);
}

#[test]
fn prefix_match_requires_a_segment_boundary() {
    assert_eq!(classify("/application-tips"), RouteClass::Public);
    assert_eq!(classify("/employers-faq"), RouteClass::Public);
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn no_decision_before_bootstrap_resolves() {
    assert_eq!(decide("/app/applications", &SessionState::Unstarted), Access::Wait);
    assert_eq!(decide("/app/applications", &SessionState::Initializing), Access::Wait);
}

#[test]
fn protected_path_while_signed_out_redirects_to_login_with_return_target() {
    assert_eq!(
        decide("/app/applications", &signed_out()),
        Access::Redirect("/auth/login?redirectTo=%2Fapp%2Fapplications".to_owned())
    );
}

#[test]
fn public_paths_are_always_allowed() {
    assert_eq!(decide("/", &signed_out()), Access::Allow);
    assert_eq!(decide("/jobs/42", &signed_in(Role::JobSeeker)), Access::Allow);
}

#[test]
fn signed_out_user_may_visit_auth_pages() {
    assert_eq!(decide("/auth/login", &signed_out()), Access::Allow);
}

#[test]
fn signed_in_employer_is_bounced_from_login_to_their_dashboard() {
    assert_eq!(
        decide("/auth/login", &signed_in(Role::Employer)),
        Access::Redirect("/employer/dashboard".to_owned())
    );
}

#[test]
fn auth_page_bounce_never_targets_an_auth_path() {
    for role in [Role::JobSeeker, Role::Employer, Role::Admin, Role::Unknown] {
        let Access::Redirect(target) = decide("/auth/login", &signed_in(role)) else {
            panic!("expected a redirect for {role:?}");
        };
        assert_ne!(classify(&target), RouteClass::AuthOnly, "{target}");
    }
}

#[test]
fn role_mismatch_lands_on_own_dashboard() {
    assert_eq!(
        decide("/admin", &signed_in(Role::Employer)),
        Access::Redirect("/employer/dashboard".to_owned())
    );
    assert_eq!(
        decide("/employer/dashboard", &signed_in(Role::JobSeeker)),
        Access::Redirect("/".to_owned())
    );
}

#[test]
fn matching_role_is_allowed_into_its_area() {
    assert_eq!(decide("/employer/dashboard", &signed_in(Role::Employer)), Access::Allow);
    assert_eq!(decide("/admin", &signed_in(Role::Admin)), Access::Allow);
}

#[test]
fn any_signed_in_role_may_use_the_app_area() {
    for role in [Role::JobSeeker, Role::Employer, Role::Admin, Role::Unknown] {
        assert_eq!(decide("/app/saved", &signed_in(role)), Access::Allow);
    }
}

#[test]
fn unknown_role_lands_on_generic_dashboard() {
    assert_eq!(
        decide("/auth/login", &signed_in(Role::Unknown)),
        Access::Redirect("/dashboard".to_owned())
    );
}

// =============================================================
// Login redirect construction
// =============================================================

#[test]
fn login_redirect_preserves_the_original_path() {
    assert_eq!(
        login_redirect("/app/saved"),
        "/auth/login?redirectTo=%2Fapp%2Fsaved"
    );
}

#[test]
fn login_redirect_omits_param_for_root() {
    assert_eq!(login_redirect("/"), "/auth/login");
    assert_eq!(login_redirect(""), "/auth/login");
}

#[test]
fn login_redirect_round_trips_through_the_query_parser() {
    let target = login_redirect("/jobs/42");
    let (_, search) = target.split_once('?').unwrap();
    assert_eq!(
        crate::util::urlenc::redirect_target(search).as_deref(),
        Some("/jobs/42")
    );
}
