//! Catalog query engine.
//!
//! Filtering and ranking of the product set by user-selected criteria.

mod filter;
mod query;

pub use filter::{FilterSpec, SortKey};
pub use query::query;
