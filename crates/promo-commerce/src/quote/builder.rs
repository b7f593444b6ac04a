//! Quote assembly, rendering, and export.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::money::Pesos;
use crate::quote::pricing::QuoteLine;

/// File name used when a quote is exported.
pub const QUOTE_FILE_NAME: &str = "cotizacion.txt";

/// MIME type of the exported document.
pub const QUOTE_MIME_TYPE: &str = "text/plain";

/// Buyer identity plus the cart snapshot to price.
///
/// The fields are taken verbatim; validating them is the presentation
/// layer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteInput {
    /// Company name.
    pub company: String,
    /// Chilean taxpayer identifier.
    pub rut: String,
    /// Contact email.
    pub email: String,
    /// The cart snapshot, in cart order.
    pub items: Vec<CartItem>,
}

/// A rendered quotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// The full plain-text document, `\n`-separated, no trailing newline.
    pub text: String,
    /// Sum of line subtotals.
    pub total: Pesos,
    /// Priced lines, in cart order.
    pub lines: Vec<QuoteLine>,
}

/// Price the cart and render the quotation document.
///
/// Never fails: an empty cart yields an empty line list and a zero total.
pub fn build_quote(input: &QuoteInput) -> Quote {
    let lines: Vec<QuoteLine> = input.items.iter().map(QuoteLine::price).collect();
    let total = lines
        .iter()
        .fold(Pesos::ZERO, |acc, line| acc.saturating_add(line.subtotal));

    let rendered: Vec<String> = lines
        .iter()
        .map(|line| {
            format!(
                "{} x{} - ${} c/u = ${}",
                line.product_name,
                line.quantity,
                line.unit_price.format(),
                line.subtotal.format()
            )
        })
        .collect();

    let text = format!(
        "Empresa: {}\nRUT: {}\nEmail: {}\n\nCotización:\n{}\n\nTotal: ${}",
        input.company,
        input.rut,
        input.email,
        rendered.join("\n"),
        total.format()
    );

    Quote { text, total, lines }
}

/// Write the quote text to `<dir>/cotizacion.txt`, creating the directory
/// as needed, and return the written path.
pub fn export_quote(quote: &Quote, dir: &Path) -> Result<PathBuf, CommerceError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(QUOTE_FILE_NAME);
    fs::write(&path, &quote.text)?;
    Ok(path)
}
