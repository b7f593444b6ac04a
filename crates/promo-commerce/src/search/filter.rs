//! Catalog query inputs.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Sort keys for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Ascending by name, case-insensitive.
    #[default]
    Name,
    /// Ascending by base price.
    Price,
    /// Descending by stock count.
    Stock,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Stock => "stock",
        }
    }

    /// Parse a sort key. Unknown keys yield `None`; callers treat that as
    /// "keep input order".
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "price" => Some(SortKey::Price),
            "stock" => Some(SortKey::Stock),
            _ => None,
        }
    }
}

/// User-selected filter and sort criteria for a catalog query.
///
/// Price bounds are carried as the raw input strings: empty or non-numeric
/// values mean the bound is unset, never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Selected category; `"all"` disables the category predicate.
    pub category: CategoryId,
    /// Free-text search over product name and SKU.
    pub search: String,
    /// Sort key; `None` preserves input order.
    pub sort: Option<SortKey>,
    /// Exact supplier match; empty means any supplier.
    pub supplier: String,
    /// Minimum base price, as typed.
    pub min_price: String,
    /// Maximum base price, as typed.
    pub max_price: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: CategoryId::all(),
            search: String::new(),
            sort: Some(SortKey::Name),
            supplier: String::new(),
            min_price: String::new(),
            max_price: String::new(),
        }
    }
}

impl FilterSpec {
    /// Criteria that match everything, sorted by name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Disable sorting; results keep catalog order.
    pub fn unsorted(mut self) -> Self {
        self.sort = None;
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn with_min_price(mut self, min: impl Into<String>) -> Self {
        self.min_price = min.into();
        self
    }

    pub fn with_max_price(mut self, max: impl Into<String>) -> Self {
        self.max_price = max.into();
        self
    }
}

/// Parse a price bound. Empty, non-numeric, and negative input all mean
/// the bound is unset.
pub(crate) fn parse_price_bound(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().filter(|n| *n >= 0)
}
