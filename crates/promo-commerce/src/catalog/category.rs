//! Filterable product groupings.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A category shown in the filter rail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Icon tag for the presentation layer.
    pub icon: String,
    /// Pre-computed number of products in this category.
    pub product_count: i64,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        icon: impl Into<String>,
        product_count: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            product_count,
        }
    }

    /// Whether this is the reserved "all products" entry.
    pub fn is_all(&self) -> bool {
        self.id.is_all()
    }
}
