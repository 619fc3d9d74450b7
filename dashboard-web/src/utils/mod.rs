//! Utilities

pub mod constants;
pub mod format;
pub mod routes;
