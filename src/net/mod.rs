//! Network layer: wire types, the credentialed HTTP pipeline, and
//! per-endpoint helpers.

pub mod api;
pub mod http;
pub mod types;
