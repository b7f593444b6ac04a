//! Cart lines and the cart store.

use promo_store::KvStore;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Pesos;

/// Key the cart is persisted under.
pub const CART_KEY: &str = "cart";

/// One line in the cart.
///
/// A line embeds the product as it was at the time of addition and is
/// identified by the `(product id, color, size)` triple; the store
/// guarantees no two lines share an identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product as added.
    pub product: Product,
    /// Units requested. Always positive.
    pub quantity: i64,
    /// Selected color, if the product offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Selected size, if the product offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CartItem {
    /// Create a line with no variant selections.
    pub fn new(product: Product, quantity: i64) -> Self {
        Self {
            product,
            quantity,
            color: None,
            size: None,
        }
    }

    /// Select a color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Select a size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Whether two lines share the `(product id, color, size)` identity.
    pub fn same_line(&self, other: &CartItem) -> bool {
        self.product.id == other.product.id
            && self.color == other.color
            && self.size == other.size
    }

    /// Subtotal at the catalog base price. Cart views display this;
    /// volume pricing happens in the quote builder.
    pub fn base_subtotal(&self) -> Pesos {
        self.product.base_price.saturating_mul(self.quantity)
    }
}

/// Owner of the cart line sequence, with write-behind persistence.
///
/// All mutation goes through this store and views read [`snapshot`] after
/// mutating, so reads always observe the latest mutation. Persistence
/// failures are logged and swallowed; a broken backing store never blocks
/// or fails the cart.
///
/// [`snapshot`]: CartStore::snapshot
#[derive(Debug)]
pub struct CartStore<S: KvStore> {
    items: Vec<CartItem>,
    store: S,
}

impl<S: KvStore> CartStore<S> {
    /// Restore the cart persisted under [`CART_KEY`], starting empty when
    /// nothing valid is stored there. A malformed payload is discarded
    /// without surfacing an error.
    pub fn load(store: S) -> Self {
        let items = match store.read(CART_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<CartItem>>(&bytes) {
                Ok(items) if items.iter().all(|i| i.quantity > 0) => {
                    tracing::debug!(lines = items.len(), "restored persisted cart");
                    items
                }
                Ok(_) => {
                    tracing::warn!("persisted cart has non-positive quantities, starting empty");
                    Vec::new()
                }
                Err(error) => {
                    tracing::warn!(%error, "persisted cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "could not read persisted cart, starting empty");
                Vec::new()
            }
        };
        Self { items, store }
    }

    /// Add a line, merging into an existing line with the same
    /// `(product id, color, size)` identity. Merging only increases the
    /// quantity; product and variant fields stay untouched.
    pub fn add(&mut self, item: CartItem) -> Result<(), CommerceError> {
        if item.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(item.quantity));
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.same_line(&item)) {
            existing.quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;
        } else {
            self.items.push(item);
        }
        self.persist();
        Ok(())
    }

    /// Remove every line for `product_id`, regardless of color or size.
    /// Returns the number of lines removed.
    pub fn remove(&mut self, product_id: ProductId) -> usize {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of quantities across all lines.
    pub fn count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Read-only view of the lines, in insertion order.
    pub fn snapshot(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    // Write-behind. Failures must not surface on the mutation path.
    fn persist(&mut self) {
        let payload = match serde_json::to_vec(&self.items) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(%error, "could not serialize cart, skipping persist");
                return;
            }
        };
        if let Err(error) = self.store.write(CART_KEY, &payload) {
            tracing::warn!(%error, "could not persist cart");
        }
    }
}
