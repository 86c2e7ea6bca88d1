//! Small framework-free helpers.

pub mod urlenc;
