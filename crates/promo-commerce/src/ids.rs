//! Newtype identifiers for catalog entities.
//!
//! Keeping ids typed prevents mixing a numeric product id with a category
//! tag, and gives the reserved `"all"` tag one authoritative home.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved category identifier meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Stable numeric product identifier, unique across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an id from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A category tag. The reserved tag `"all"` matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a tag from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved "no restriction" tag.
    pub fn all() -> Self {
        Self(ALL_CATEGORIES.to_string())
    }

    /// Whether this is the reserved "no restriction" tag.
    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(id.as_u32(), 42);
    }

    #[test]
    fn test_category_id_all() {
        assert!(CategoryId::all().is_all());
        assert!(CategoryId::default().is_all());
        assert!(!CategoryId::new("textil").is_all());
    }

    #[test]
    fn test_category_id_from_str() {
        let id: CategoryId = "textil".into();
        assert_eq!(id.as_str(), "textil");
    }
}
