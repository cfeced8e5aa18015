//! # Lookup Helpers
//!
//! Glue between repository lookups and [`NotFoundError`].
//!
//! - [`OptionExt::ok_or_not_found`]: turns a missing row into a `NotFoundError`.
//! - [`find_not_found`]: finds a `NotFoundError` inside an [`anyhow::Error`] chain,
//!   so presentation layers can map it to a "not found" response.
//!
//! # Example
//! ```rust
//! use entity_error::{search_params, OptionExt};
//!
//! fn find_user(email: &str) -> Option<u64> {
//!     (email == "alice@example.com").then_some(1)
//! }
//!
//! let id = find_user("alice@example.com")
//!     .ok_or_not_found("User", || search_params! { "email" => "alice@example.com" })
//!     .unwrap();
//! assert_eq!(id, 1);
//!
//! let err = find_user("bob@example.com")
//!     .ok_or_not_found("User", || search_params! { "email" => "bob@example.com" })
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "User was not found for parameters {email=bob@example.com}");
//! ```
use tracing::debug;

use super::{entity::NotFoundError, params::SearchParams};

/// Extension for `Option` results returned by repository lookups.
pub trait OptionExt<T> {
    /// Returns the contained value, or a [`NotFoundError`] built from `params`.
    ///
    /// `params` is only evaluated when the value is missing.
    fn ok_or_not_found<P, F>(self, entity: &str, params: F) -> Result<T, NotFoundError>
    where
        F: FnOnce() -> P,
        P: Into<SearchParams>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found<P, F>(self, entity: &str, params: F) -> Result<T, NotFoundError>
    where
        F: FnOnce() -> P,
        P: Into<SearchParams>,
    {
        match self {
            Some(v) => Ok(v),
            None => {
                let err = NotFoundError::new(entity, params());
                debug!(
                    entity = err.entity(),
                    params = %err.search_params(),
                    "entity lookup returned no result"
                );
                Err(err)
            }
        }
    }
}

/// Returns the first [`NotFoundError`] in the error chain, if any.
///
/// # Example
/// ```rust
/// use entity_error::{find_not_found, NotFoundError};
/// use entity_error::anyhow::{Context, Result};
///
/// let res: Result<()> = Err(NotFoundError::new("Order", [("id", "9")]))
///     .context("loading order page");
///
/// let err = res.unwrap_err();
/// assert_eq!(find_not_found(&err).map(|e| e.entity()), Some("Order"));
/// ```
pub fn find_not_found(err: &anyhow::Error) -> Option<&NotFoundError> {
    err.chain().find_map(|e| e.downcast_ref::<NotFoundError>())
}
