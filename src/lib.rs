//! # jobdeck
//!
//! Leptos + WASM front-end for a job-search marketplace: public listings,
//! job detail with apply and save flows, and role-based areas for job
//! seekers, employers, and admins.
//!
//! The engineering core is the session layer: a tagged-variant session
//! state machine (`state::session`), a credentialed HTTP pipeline with
//! refresh-once 401 recovery (`net::http`), a one-shot bootstrap provider
//! (`components::session_provider`), and a single pure navigation guard
//! (`routes::guard`). Everything renders against an external HTTP API;
//! there is no backend in this crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
