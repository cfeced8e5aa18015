use serde::Serialize;
use thiserror::Error;

use super::{argument::InvalidArgumentError, params::SearchParams};

/// A common error representing that a lookup for an entity failed.
///
/// The message names the entity and the search parameters used:
/// `"<Entity> was not found for parameters {key=value, ...}"`.
///
/// This error is intended to be used across applications and layers
/// (repository, application, presentation) without depending on
/// domain-specific business rules.
///
/// # Design
/// - Infrastructure-agnostic (no DB / HTTP dependency)
/// - Message computed once at construction, immutable afterwards
/// - Serializable so an outer layer can expose it as a payload
///
/// # Example
/// ```
/// use entity_error::{search_params, NotFoundError};
///
/// let err = NotFoundError::new("order", search_params! { "id" => "42", "status" => "paid" });
/// assert_eq!(
///     err.to_string(),
///     "Order was not found for parameters {id=42, status=paid}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct NotFoundError {
    entity: String,
    search_params: SearchParams,
    message: String,
}

impl NotFoundError {
    /// Create a new `NotFoundError` for the specified entity and search parameters.
    ///
    /// # Example
    /// ```
    /// use entity_error::NotFoundError;
    ///
    /// let err = NotFoundError::new("User", [("email", "alice@example.com")]);
    /// assert_eq!(err.entity(), "User");
    /// assert_eq!(err.search_params().get("email"), Some("alice@example.com"));
    /// ```
    pub fn new(entity: impl Into<String>, search_params: impl Into<SearchParams>) -> Self {
        let entity = entity.into();
        let search_params = search_params.into();
        let message = format!(
            "{} was not found for parameters {}",
            capitalize(&entity),
            search_params
        );

        Self {
            entity,
            search_params,
            message,
        }
    }

    /// Create a `NotFoundError` from a flat list of alternating keys and values.
    ///
    /// Kept for call sites that collect parameters as `[key, value, key, value, ...]`.
    ///
    /// # Errors
    /// Returns [`InvalidArgumentError`] when `pairs` has an odd length.
    ///
    /// # Example
    /// ```
    /// use entity_error::NotFoundError;
    ///
    /// let err = NotFoundError::from_pairs("user", &["id", "7"]).unwrap();
    /// assert_eq!(err.message(), "User was not found for parameters {id=7}");
    ///
    /// assert!(NotFoundError::from_pairs("user", &["id"]).is_err());
    /// ```
    pub fn from_pairs<S: AsRef<str>>(
        entity: impl Into<String>,
        pairs: &[S],
    ) -> Result<Self, InvalidArgumentError> {
        let search_params = SearchParams::from_pairs(pairs)?;
        Ok(Self::new(entity, search_params))
    }

    /// Create a `NotFoundError` named after the Rust type `T`.
    ///
    /// Uses the last path segment of [`std::any::type_name`], without generic arguments.
    ///
    /// # Example
    /// ```
    /// use entity_error::NotFoundError;
    ///
    /// struct Member;
    ///
    /// let err = NotFoundError::for_entity::<Member>([("id", "3")]);
    /// assert_eq!(err.entity(), "Member");
    /// ```
    pub fn for_entity<T: ?Sized>(search_params: impl Into<SearchParams>) -> Self {
        Self::new(short_type_name::<T>(), search_params)
    }

    /// Name of the entity as supplied by the caller.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn search_params(&self) -> &SearchParams {
        &self.search_params
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Upper-cases the first character; the rest is left untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_params;

    #[test]
    fn new_sets_fields_correctly() {
        let err = NotFoundError::new("User", [("id", "1")]);

        assert_eq!(err.entity(), "User");
        assert_eq!(err.search_params().get("id"), Some("1"));
    }

    #[test]
    fn display_format_is_correct() {
        let err = NotFoundError::new("Order", [("id", "42"), ("status", "paid")]);
        assert_eq!(
            err.to_string(),
            "Order was not found for parameters {id=42, status=paid}"
        );
    }

    #[test]
    fn lowercase_entity_is_capitalized() {
        let err = NotFoundError::new("user", SearchParams::new());
        assert!(err.message().starts_with("User was not found"));
    }

    #[test]
    fn capitalization_touches_only_first_character() {
        assert_eq!(capitalize("order"), "Order");
        assert_eq!(capitalize("Order"), "Order");
        assert_eq!(capitalize("orderLine"), "OrderLine");
        assert_eq!(capitalize("ORDER"), "ORDER");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn entity_field_keeps_original_casing() {
        let err = NotFoundError::new("user", SearchParams::new());
        assert_eq!(err.entity(), "user");
    }

    #[test]
    fn zero_pairs_render_empty_braces() {
        let pairs: [&str; 0] = [];
        let err = NotFoundError::from_pairs("Order", &pairs).unwrap();
        assert_eq!(err.to_string(), "Order was not found for parameters {}");
    }

    #[test]
    fn from_pairs_duplicate_keys_last_write_wins() {
        let err = NotFoundError::from_pairs("Order", &["id", "1", "id", "2"]).unwrap();

        assert_eq!(err.search_params().len(), 1);
        assert_eq!(err.to_string(), "Order was not found for parameters {id=2}");
    }

    #[test]
    fn from_pairs_odd_length_is_rejected() {
        let err = NotFoundError::from_pairs("Order", &["id", "1", "status"]).unwrap_err();
        assert_eq!(err.length(), 3);
    }

    #[test]
    fn from_pairs_matches_typed_constructor() {
        let shim = NotFoundError::from_pairs("Order", &["id", "42", "status", "paid"]).unwrap();
        let typed = NotFoundError::new("Order", search_params! { "id" => "42", "status" => "paid" });

        assert_eq!(shim, typed);
    }

    #[test]
    fn for_entity_uses_short_type_name() {
        struct Invoice;
        #[allow(dead_code)]
        struct Page<T>(T);

        assert_eq!(NotFoundError::for_entity::<Invoice>(SearchParams::new()).entity(), "Invoice");
        assert_eq!(
            NotFoundError::for_entity::<Page<Invoice>>(SearchParams::new()).entity(),
            "Page"
        );
        assert_eq!(NotFoundError::for_entity::<str>(SearchParams::new()).entity(), "str");
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let err = NotFoundError::new("user", [("email", "a@b.c")]);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["entity"], "user");
        assert_eq!(json["searchParams"]["email"], "a@b.c");
        assert_eq!(
            json["message"],
            "User was not found for parameters {email=a@b.c}"
        );
    }

    #[test]
    fn debug_output_contains_struct_name_and_entity() {
        let err = NotFoundError::new("Order", SearchParams::new());
        let debug = format!("{:?}", err);

        assert!(debug.contains("NotFoundError"));
        assert!(debug.contains("Order"));
    }
}
