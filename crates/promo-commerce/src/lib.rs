//! Storefront domain core: catalog, cart, and quotation logic.
//!
//! Three leaf components sit under the presentation layer:
//!
//! - **Catalog**: typed product/category records, the shipped seed data,
//!   and the filter/sort query engine.
//! - **Cart**: a persistent store of cart lines keyed by product plus
//!   variant attributes.
//! - **Quote**: volume-break pricing over a cart snapshot, rendered as a
//!   plain-text quotation document.
//!
//! # Example
//!
//! ```rust,ignore
//! use promo_commerce::prelude::*;
//! use promo_store::MemoryStore;
//!
//! let catalog = promo_commerce::catalog::seed::catalog();
//! let results = catalog.query(&FilterSpec::new().with_category("textil"));
//!
//! let mut cart = CartStore::load(MemoryStore::new());
//! cart.add(CartItem::new(results[0].clone(), 25))?;
//!
//! let quote = build_quote(&QuoteInput {
//!     company: "ACME".into(),
//!     rut: "76.123.456-7".into(),
//!     email: "compras@acme.cl".into(),
//!     items: cart.snapshot().to_vec(),
//! });
//! println!("{}", quote.text);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod quote;
pub mod search;

pub use error::CommerceError;
pub use ids::{CategoryId, ProductId, ALL_CATEGORIES};
pub use money::Pesos;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryId, ProductId, ALL_CATEGORIES};
    pub use crate::money::Pesos;

    // Catalog
    pub use crate::catalog::{Catalog, Category, PriceBreak, Product};

    // Cart
    pub use crate::cart::{CartItem, CartStore, CART_KEY};

    // Quote
    pub use crate::quote::{
        build_quote, effective_unit_price, export_quote, Quote, QuoteInput, QuoteLine,
        QUOTE_FILE_NAME, QUOTE_MIME_TYPE,
    };

    // Search
    pub use crate::search::{query, FilterSpec, SortKey};
}
