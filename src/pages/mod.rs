//! Page components, one per routed view.

pub mod account;
pub mod admin;
pub mod applications;
pub mod employer;
pub mod job_detail;
pub mod jobs;
pub mod login;
pub mod register;
pub mod saved;
