//! # Asseti Shared Library
//!
//! Pure Rust pieces of the dashboard that do not depend on the browser:
//! domain types, formatting, the session state model and sample data.
//! Keeping them here lets them be unit-tested natively while the Leptos
//! crate stays a thin rendering layer.
//!
//! ## Structure
//!
//! - **[`dto`]**: Portfolio and analytics data types
//! - **[`error`]**: [`error::AppError`], the one error type the UI surfaces
//! - **[`mock`]**: Fixed sample datasets
//! - **[`network`]**: Network presets (Base) and chain id parsing
//! - **[`session`]**: Wallet/connection state and its persistence rules
//! - **[`utils`]**: Address and number formatting
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::session::{ConnectionState, MemoryStore};
//! use shared::utils::truncate_address;
//!
//! let store = MemoryStore::new();
//! let state = ConnectionState::connected("0x71C7656EC7ab88b098defB751B7401B5f6d8976F");
//! state.save(&store).unwrap();
//!
//! let restored = ConnectionState::load(&store).unwrap();
//! assert_eq!(truncate_address(restored.address().unwrap()), "0x71C7...976F");
//! ```

pub mod dto;
pub mod error;
pub mod mock;
pub mod network;
pub mod session;
pub mod utils;

pub use dto::*;
pub use error::{AppError, Result};
pub use utils::*;
