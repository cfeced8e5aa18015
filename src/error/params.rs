//! # Search Parameters
//!
//! Ordered `key → value` mapping describing the criteria of an entity lookup.
//!
//! - Insertion order is preserved.
//! - Inserting an existing key replaces its value in place (last write wins).
//! - [`Display`](std::fmt::Display) renders `{key=value, key=value}`.
//!
//! # Example
//! ```rust
//! use entity_error::search_params;
//!
//! let params = search_params! { "id" => "42", "status" => "paid" };
//! assert_eq!(params.to_string(), "{id=42, status=paid}");
//! ```
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::argument::InvalidArgumentError;

/// Ordered string mapping used as the search criteria of a failed lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    entries: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from a flat list of alternating keys and values.
    ///
    /// Index `2i` is the key and `2i + 1` its value.
    ///
    /// # Errors
    /// Returns [`InvalidArgumentError`] when the list length is odd.
    ///
    /// # Example
    /// ```rust
    /// use entity_error::SearchParams;
    ///
    /// let params = SearchParams::from_pairs(&["id", "1", "id", "2"]).unwrap();
    /// assert_eq!(params.len(), 1);
    /// assert_eq!(params.get("id"), Some("2"));
    ///
    /// assert!(SearchParams::from_pairs(&["id"]).is_err());
    /// ```
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, InvalidArgumentError> {
        if pairs.len() % 2 == 1 {
            return Err(InvalidArgumentError::new(pairs.len()));
        }

        Ok(pairs
            .chunks_exact(2)
            .map(|kv| (kv[0].as_ref(), kv[1].as_ref()))
            .collect())
    }

    /// Inserts a parameter.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

// ------------------------------
// Conversions
// ------------------------------

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = SearchParams::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<S: AsRef<str>> TryFrom<&[S]> for SearchParams {
    type Error = InvalidArgumentError;

    fn try_from(pairs: &[S]) -> Result<Self, Self::Error> {
        SearchParams::from_pairs(pairs)
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for SearchParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ------------------------------------
// search_params! macro
// ------------------------------------

/// Macro to build [`SearchParams`] from `key => value` pairs.
///
/// Keys and values accept anything convertible into `String`.
///
/// # Example
/// ```rust
/// use entity_error::search_params;
///
/// let email = String::from("alice@example.com");
/// let params = search_params! { "email" => email, "active" => "true" };
/// assert_eq!(params.get("email"), Some("alice@example.com"));
///
/// let empty = search_params! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! search_params {
    ($($k:expr => $v:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut p = $crate::SearchParams::new();
        $( p.insert($k, $v); )*
        p
    }};
}
