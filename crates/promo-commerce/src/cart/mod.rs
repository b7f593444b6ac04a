//! Shopping cart module.
//!
//! A single owner of the cart line sequence, with write-behind persistence
//! through the key-value seam.

mod store;

pub use store::{CartItem, CartStore, CART_KEY};
