//! # entity_error
//!
//! Common "entity not found" error shared by repository, application and
//! presentation layers.
//!
//! This crate provides:
//! - [`NotFoundError`]: names the entity and the search parameters of a failed lookup
//! - [`SearchParams`]: ordered `key → value` criteria (`search_params!` macro)
//! - [`OptionExt`] / [`find_not_found`]: lookup helpers for `Option` and `anyhow` errors
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use entity_error::anyhow::Result;
//! use entity_error::{search_params, OptionExt};
//!
//! fn load_order(id: &str) -> Result<u64> {
//!     let found: Option<u64> = None;
//!     let order = found.ok_or_not_found("order", || search_params! { "id" => id })?;
//!     Ok(order)
//! }
//!
//! let err = load_order("42").unwrap_err();
//! assert_eq!(err.to_string(), "Order was not found for parameters {id=42}");
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use serde;
pub use thiserror;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod error;

pub use error::{
    argument::InvalidArgumentError,
    entity::NotFoundError,
    lookup::{find_not_found, OptionExt},
    params::SearchParams,
};
