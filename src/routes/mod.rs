//! Route classification and the navigation guard.

pub mod guard;
