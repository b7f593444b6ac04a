//! Domain error types.

use thiserror::Error;

/// Errors that can occur in storefront-core operations.
///
/// The query engine and the quote builder never fail; errors here come from
/// cart mutation and quote export. Persistence problems are recovered
/// locally by the cart store and never surface as errors.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Cart quantities must be positive integers.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Merging quantities would overflow.
    #[error("quantity overflow when merging cart lines")]
    Overflow,

    /// Writing an exported quote to disk failed.
    #[error("could not export quote: {0}")]
    Io(#[from] std::io::Error),
}
