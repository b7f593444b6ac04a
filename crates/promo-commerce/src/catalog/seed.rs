//! Built-in catalog data.
//!
//! The storefront ships with a static catalog; there is no server-side
//! product source. Counts on the category records are pre-computed against
//! the product list below, and the shipped price breaks are monotonic
//! (higher threshold, lower price) even though the pricing engine does not
//! rely on that.

use crate::catalog::{Catalog, Category, PriceBreak, Product};
use crate::ids::CategoryId;
use crate::money::Pesos;

/// Assemble the shipped catalog.
pub fn catalog() -> Catalog {
    Catalog::new(products(), categories())
}

/// The category rail, including the reserved "all" entry.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::all(), "Todos los productos", "apps", 10),
        Category::new("textil", "Textil", "checkroom", 4),
        Category::new("escritura", "Escritura", "edit", 2),
        Category::new("drinkware", "Drinkware", "local_cafe", 2),
        Category::new("tecnologia", "Tecnología", "devices", 1),
        Category::new("bolsas", "Bolsas", "shopping_bag", 1),
    ]
}

/// The shipped product set.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Polera Piqué Premium",
            "textil",
            "Textil Andino",
            "TEX-001",
            Pesos::new(4990),
            320,
        )
        .with_image("/img/tex-001.png")
        .with_price_breaks(vec![
            PriceBreak::new(25, Pesos::new(4490)),
            PriceBreak::new(50, Pesos::new(3990)),
            PriceBreak::new(100, Pesos::new(3490)),
        ]),
        Product::new(
            2,
            "Polerón Canguro",
            "textil",
            "Textil Andino",
            "TEX-002",
            Pesos::new(12990),
            150,
        )
        .with_image("/img/tex-002.png")
        .with_price_breaks(vec![
            PriceBreak::new(10, Pesos::new(11990)),
            PriceBreak::new(50, Pesos::new(10990)),
        ]),
        Product::new(
            3,
            "Gorro Snapback",
            "textil",
            "Promo Import",
            "TEX-003",
            Pesos::new(3490),
            400,
        )
        .with_image("/img/tex-003.png")
        .with_price_breaks(vec![
            PriceBreak::new(50, Pesos::new(2990)),
            PriceBreak::new(200, Pesos::new(2490)),
        ]),
        Product::new(
            4,
            "Parka Corporativa",
            "textil",
            "Textil Andino",
            "TEX-004",
            Pesos::new(24990),
            60,
        )
        .with_price_breaks(vec![PriceBreak::new(10, Pesos::new(22990))]),
        Product::new(
            5,
            "Bolígrafo Metálico",
            "escritura",
            "Promo Import",
            "ESC-001",
            Pesos::new(890),
            2500,
        )
        .with_image("/img/esc-001.png")
        .with_price_breaks(vec![
            PriceBreak::new(100, Pesos::new(790)),
            PriceBreak::new(500, Pesos::new(690)),
            PriceBreak::new(1000, Pesos::new(590)),
        ]),
        Product::new(
            6,
            "Lápiz Ecológico",
            "escritura",
            "Grabados del Sur",
            "ESC-002",
            Pesos::new(450),
            5000,
        )
        .with_price_breaks(vec![
            PriceBreak::new(250, Pesos::new(390)),
            PriceBreak::new(1000, Pesos::new(340)),
        ]),
        Product::new(
            7,
            "Taza Cerámica Sublimable",
            "drinkware",
            "Grabados del Sur",
            "DRK-001",
            Pesos::new(2990),
            800,
        )
        .with_image("/img/drk-001.png")
        .with_price_breaks(vec![
            PriceBreak::new(36, Pesos::new(2690)),
            PriceBreak::new(144, Pesos::new(2390)),
        ]),
        Product::new(
            8,
            "Botella Térmica 500ml",
            "drinkware",
            "Promo Import",
            "DRK-002",
            Pesos::new(8990),
            220,
        )
        .with_image("/img/drk-002.png")
        .with_price_breaks(vec![
            PriceBreak::new(25, Pesos::new(8290)),
            PriceBreak::new(100, Pesos::new(7490)),
        ]),
        Product::new(
            9,
            "Pendrive 32GB",
            "tecnologia",
            "Promo Import",
            "TEC-001",
            Pesos::new(6990),
            350,
        )
        .with_image("/img/tec-001.png")
        .with_price_breaks(vec![
            PriceBreak::new(50, Pesos::new(6490)),
            PriceBreak::new(200, Pesos::new(5990)),
        ]),
        Product::new(
            10,
            "Bolsa Ecológica TNT",
            "bolsas",
            "Grabados del Sur",
            "BOL-001",
            Pesos::new(990),
            3000,
        )
        .with_image("/img/bol-001.png")
        .with_price_breaks(vec![
            PriceBreak::new(100, Pesos::new(890)),
            PriceBreak::new(500, Pesos::new(790)),
        ]),
    ]
}
