//! Product and volume price-break records.

use crate::ids::{CategoryId, ProductId};
use crate::money::Pesos;
use serde::{Deserialize, Serialize};

/// A volume discount tier: order at least `min_qty` units, pay `price` per
/// unit.
///
/// Entries are independent of each other. Storage order carries no meaning
/// and a tier's price is not guaranteed to undercut the base price; the
/// pricing engine selects the cheapest eligible tier by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreak {
    /// Minimum quantity for this tier to apply.
    pub min_qty: i64,
    /// Discounted unit price.
    pub price: Pesos,
}

impl PriceBreak {
    pub fn new(min_qty: i64, price: Pesos) -> Self {
        Self { min_qty, price }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable identifier, unique across the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category tag, one of the known category identifiers.
    pub category: CategoryId,
    /// Supplier name.
    pub supplier: String,
    /// Stock-keeping code. Search matches it case-insensitively.
    pub sku: String,
    /// Base unit price in pesos.
    pub base_price: Pesos,
    /// Units currently in stock.
    pub stock: i64,
    /// Image reference for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Volume discount tiers, possibly empty and in no particular order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_breaks: Vec<PriceBreak>,
}

impl Product {
    /// Create a product with no image and no price breaks.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        supplier: impl Into<String>,
        sku: impl Into<String>,
        base_price: Pesos,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            supplier: supplier.into(),
            sku: sku.into(),
            base_price,
            stock,
            image: None,
            price_breaks: Vec::new(),
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Attach volume discount tiers.
    pub fn with_price_breaks(mut self, breaks: Vec<PriceBreak>) -> Self {
        self.price_breaks = breaks;
        self
    }

    /// Check whether any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}
