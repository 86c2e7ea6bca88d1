use super::*;

// =============================================================
// Role deserialization
// =============================================================

#[test]
fn role_parses_snake_case_values() {
    let role: Role = serde_json::from_str("\"job_seeker\"").unwrap();
    assert_eq!(role, Role::JobSeeker);

    let role: Role = serde_json::from_str("\"employer\"").unwrap();
    assert_eq!(role, Role::Employer);

    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_accepts_recruiter_alias() {
    let role: Role = serde_json::from_str("\"recruiter\"").unwrap();
    assert_eq!(role, Role::Employer);
}

#[test]
fn role_falls_back_to_unknown() {
    let role: Role = serde_json::from_str("\"superuser\"").unwrap();
    assert_eq!(role, Role::Unknown);
}

#[test]
fn application_status_falls_back_to_unknown() {
    let status: ApplicationStatus = serde_json::from_str("\"archived\"").unwrap();
    assert_eq!(status, ApplicationStatus::Unknown);
    assert_eq!(status.label(), "Pending");
}

// =============================================================
// Payload shapes
// =============================================================

#[test]
fn user_deserializes_from_me_response() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Dana",
        "email": "dana@example.com",
        "role": "employer",
    }))
    .unwrap();
    assert_eq!(user.role, Role::Employer);
    assert_eq!(user.name, "Dana");
}

#[test]
fn job_summary_tolerates_missing_optional_fields() {
    let job: JobSummary = serde_json::from_value(serde_json::json!({
        "id": "j-1",
        "title": "Backend Engineer",
        "company_name": "Initech",
        "location": "Remote",
    }))
    .unwrap();
    assert!(job.salary_range.is_none());
    assert!(job.posted_at.is_none());
}

#[test]
fn employer_job_flattens_summary_fields() {
    let job: EmployerJob = serde_json::from_value(serde_json::json!({
        "id": "j-2",
        "title": "Data Analyst",
        "company_name": "Initech",
        "location": "Berlin",
        "applicant_count": 7,
    }))
    .unwrap();
    assert_eq!(job.job.id, "j-2");
    assert_eq!(job.applicant_count, 7);
    assert!(job.is_open);
}
