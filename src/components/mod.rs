//! Reusable UI components.

pub mod job_card;
pub mod nav_bar;
pub mod session_provider;
pub mod toast;
