//! Volume pricing.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::catalog::Product;
use crate::money::Pesos;

/// Effective unit price for `quantity` units of `product`.
///
/// The minimum of the base price and every price break whose threshold is
/// met. Selection is by value, never by position, so an unsorted or
/// non-monotonic break list still yields the cheapest eligible tier. With
/// no eligible break the base price stands.
pub fn effective_unit_price(product: &Product, quantity: i64) -> Pesos {
    product
        .price_breaks
        .iter()
        .filter(|b| quantity >= b.min_qty)
        .map(|b| b.price)
        .fold(product.base_price, |best, price| best.min(price))
}

/// One priced line of a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    /// Product display name.
    pub product_name: String,
    /// Units quoted.
    pub quantity: i64,
    /// Unit price after volume breaks.
    pub unit_price: Pesos,
    /// `unit_price` times `quantity`.
    pub subtotal: Pesos,
}

impl QuoteLine {
    /// Price a cart line.
    pub fn price(item: &CartItem) -> Self {
        let unit_price = effective_unit_price(&item.product, item.quantity);
        Self {
            product_name: item.product.name.clone(),
            quantity: item.quantity,
            unit_price,
            subtotal: unit_price.saturating_mul(item.quantity),
        }
    }
}
