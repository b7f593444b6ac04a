//! Quote builder module.
//!
//! Prices a cart snapshot with volume breaks and renders the plain-text
//! quotation document.

mod builder;
mod pricing;

pub use builder::{
    build_quote, export_quote, Quote, QuoteInput, QUOTE_FILE_NAME, QUOTE_MIME_TYPE,
};
pub use pricing::{effective_unit_price, QuoteLine};
