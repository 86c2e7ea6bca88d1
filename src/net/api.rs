//! REST API helpers for the marketplace backend.
//!
//! Thin wrappers over [`crate::net::http`]: each function names one endpoint
//! and its payload shape. All calls carry cookie credentials and inherit the
//! refresh-once 401 recovery from the pipeline.

use super::http::{self, ApiError, Method};
use super::types::{
    AdminOverview, Application, ApplyRequest, Credentials, EmployerJob, Job, JobSummary,
    RegisterRequest, User,
};
use crate::util::urlenc;

/// Fetch the currently authenticated user from `GET /api/auth/me`.
///
/// # Errors
///
/// Any failure (network, 401, bad body) means "no usable session" to the
/// bootstrap caller; the error is returned for logging.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    http::request_json(Method::Get, "/api/auth/me", None).await
}

/// Sign in via `POST /api/auth/login`. Returns the authenticated user;
/// the session cookie is set by the server.
///
/// # Errors
///
/// A 401 here surfaces as [`ApiError::Status`] — invalid credentials, not
/// an expired session.
pub async fn login(credentials: &Credentials) -> Result<User, ApiError> {
    let body = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
    http::request_json(Method::Post, "/api/auth/login", Some(body)).await
}

/// Create an account via `POST /api/auth/register` and sign it in.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    http::request_json(Method::Post, "/api/auth/register", Some(body)).await
}

/// End the server-side session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure; callers clear local state
/// regardless.
pub async fn logout() -> Result<(), ApiError> {
    http::request_unit(Method::Post, "/api/auth/logout", None).await
}

/// Fetch job listings from `GET /api/jobs`, optionally filtered by a
/// free-text query.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn fetch_jobs(query: &str) -> Result<Vec<JobSummary>, ApiError> {
    let path = if query.trim().is_empty() {
        "/api/jobs".to_owned()
    } else {
        format!("/api/jobs?q={}", urlenc::encode_component(query.trim()))
    };
    http::request_json(Method::Get, &path, None).await
}

/// Fetch one job posting from `GET /api/jobs/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn fetch_job(id: &str) -> Result<Job, ApiError> {
    http::request_json(Method::Get, &format!("/api/jobs/{id}"), None).await
}

/// Submit an application via `POST /api/jobs/{id}/apply`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn apply_to_job(id: &str, cover_note: &str) -> Result<Application, ApiError> {
    let request = ApplyRequest { cover_note: cover_note.to_owned() };
    let body = serde_json::to_value(&request).map_err(|e| ApiError::Decode(e.to_string()))?;
    http::request_json(Method::Post, &format!("/api/jobs/{id}/apply"), Some(body)).await
}

/// Fetch the signed-in user's applications from `GET /api/applications`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn fetch_applications() -> Result<Vec<Application>, ApiError> {
    http::request_json(Method::Get, "/api/applications", None).await
}

/// Fetch the signed-in user's saved jobs from `GET /api/saved-jobs`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn fetch_saved_jobs() -> Result<Vec<JobSummary>, ApiError> {
    http::request_json(Method::Get, "/api/saved-jobs", None).await
}

/// Save a job via `POST /api/saved-jobs/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn save_job(id: &str) -> Result<(), ApiError> {
    http::request_unit(Method::Post, &format!("/api/saved-jobs/{id}"), None).await
}

/// Remove a saved job via `DELETE /api/saved-jobs/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn unsave_job(id: &str) -> Result<(), ApiError> {
    http::request_unit(Method::Delete, &format!("/api/saved-jobs/{id}"), None).await
}

/// Fetch the employer's own postings from `GET /api/employer/jobs`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn fetch_employer_jobs() -> Result<Vec<EmployerJob>, ApiError> {
    http::request_json(Method::Get, "/api/employer/jobs", None).await
}

/// Fetch site-wide counters from `GET /api/admin/overview`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn fetch_admin_overview() -> Result<AdminOverview, ApiError> {
    http::request_json(Method::Get, "/api/admin/overview", None).await
}
