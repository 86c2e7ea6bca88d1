//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused
//! models. The session is owned by an injected [`session::SessionHandle`];
//! the rest are plain structs held in `RwSignal` contexts provided from
//! `App`.

pub mod saved;
pub mod session;
pub mod ui;
