//! # Data Transfer Objects (DTOs)
//!
//! Data structures the dashboard views render.
//!
//! ## Module Organization
//!
//! - [`portfolio`] - Assets, allocation slices and portfolio snapshots
//! - [`analytics`] - Performance history and transaction volume
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None`
//! - **Timestamps**: RFC 3339 via `chrono`

pub mod analytics;
pub mod portfolio;

pub use analytics::*;
pub use portfolio::*;
