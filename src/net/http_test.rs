use super::*;

// =============================================================
// 401 recovery policy
// =============================================================

#[test]
fn first_401_on_api_path_refreshes() {
    assert_eq!(
        on_unauthorized("/api/applications", false),
        Recovery::RefreshAndRetry
    );
}

#[test]
fn second_401_never_refreshes_again() {
    assert_eq!(on_unauthorized("/api/applications", true), Recovery::Surface);
}

#[test]
fn auth_endpoints_never_trigger_refresh() {
    assert_eq!(on_unauthorized("/api/auth/me", false), Recovery::Surface);
    assert_eq!(on_unauthorized("/api/auth/login", false), Recovery::Surface);
    assert_eq!(on_unauthorized("/api/auth/refresh", false), Recovery::Surface);
}

#[test]
fn auth_path_detection_is_prefix_based() {
    assert!(is_auth_path("/api/auth/logout"));
    assert!(!is_auth_path("/api/jobs"));
    assert!(!is_auth_path("/api/authors"));
}

// =============================================================
// Error display
// =============================================================

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        ApiError::Network("timeout".to_owned()).to_string(),
        "cannot reach server: timeout"
    );
    assert_eq!(ApiError::SessionExpired.to_string(), "session expired");
    assert_eq!(
        ApiError::Status(503).to_string(),
        "request failed with status 503"
    );
}
