//! Product identifier newtype.
//!
//! Products are keyed by opaque strings: the demo catalog uses decimal
//! strings (`"1"`, `"2"`, ...) but nothing in the system assumes numerals.
//! Whether an identifier actually refers to a product is decided by a
//! catalog lookup at the point of use, never by the type itself.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque product identifier.
///
/// `ProductId` is deliberately unvalidated: an identifier that matches no
/// catalog entry is an expected condition (surfaced as a not-found outcome
/// by the stores), not a malformed value.
///
/// The type is `Ord` so it can key the on-disk cart document directly;
/// the resulting ordering is lexicographic and carries no meaning.
///
/// ## Examples
///
/// ```
/// use greengrocer_core::ProductId;
///
/// let id = ProductId::new("1");
/// assert_eq!(id.as_str(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = ProductId::new("42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("7");
        assert_eq!(format!("{id}"), "7");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // "10" sorts before "2"; the ordering is structural, not numeric.
        assert!(ProductId::new("10") < ProductId::new("2"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(ProductId::from("5"), ProductId::new("5"));
        assert_eq!(ProductId::from(String::from("5")), ProductId::new("5"));
    }
}
