//! Wire types shared between the API layer and the UI.
//!
//! All response types deserialize leniently: unknown enum values fall back
//! to an explicit `Unknown` variant instead of failing the whole payload,
//! so a server-side vocabulary change degrades display rather than breaking
//! deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, as reported by the server.
///
/// `recruiter` is accepted as a legacy alias for `employer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    JobSeeker,
    #[serde(alias = "recruiter")]
    Employer,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Human-readable label for profile views.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job seeker",
            Self::Employer => "Employer",
            Self::Admin => "Administrator",
            Self::Unknown => "Member",
        }
    }
}

/// The authenticated account, as returned by `/api/auth/me` and the
/// sign-in/register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A job posting in list views (search results, saved jobs).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
}

/// Full job posting for the detail page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
}

/// Status of a submitted application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    /// Human-readable label for the applications list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InReview => "In review",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Unknown => "Pending",
        }
    }
}

/// One of the signed-in job seeker's applications.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// A posting owned by the signed-in employer, with its applicant count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployerJob {
    #[serde(flatten)]
    pub job: JobSummary,
    #[serde(default)]
    pub applicant_count: u32,
    #[serde(default = "default_open")]
    pub is_open: bool,
}

fn default_open() -> bool {
    true
}

/// Site-wide counters for the admin landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub users: u64,
    pub jobs: u64,
    pub applications: u64,
}

/// Sign-in request payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request payload.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Application submission payload.
#[derive(Clone, Debug, Serialize)]
pub struct ApplyRequest {
    pub cover_note: String,
}
