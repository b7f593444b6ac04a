//! The loaded catalog aggregate.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::search::{self, FilterSpec};

/// The full product set plus derived lookups, loaded once at start and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    suppliers: Vec<String>,
}

impl Catalog {
    /// Build a catalog, deriving the deduplicated supplier list in
    /// first-seen order.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let mut suppliers: Vec<String> = Vec::new();
        for product in &products {
            if !suppliers.contains(&product.supplier) {
                suppliers.push(product.supplier.clone());
            }
        }
        Self {
            products,
            categories,
            suppliers,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The category rail, including the reserved "all" entry.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every supplier present in the catalog, deduplicated.
    pub fn suppliers(&self) -> &[String] {
        &self.suppliers
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Run a filter/sort query over the catalog.
    pub fn query(&self, spec: &FilterSpec) -> Vec<Product> {
        search::query(&self.products, spec)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Pesos;

    fn product(id: u32, supplier: &str) -> Product {
        Product::new(
            id,
            format!("Producto {id}"),
            "textil",
            supplier,
            format!("SKU-{id:03}"),
            Pesos::new(1000),
            10,
        )
    }

    #[test]
    fn test_suppliers_deduplicated_first_seen_order() {
        let catalog = Catalog::new(
            vec![
                product(1, "Promo Import"),
                product(2, "Textil Andino"),
                product(3, "Promo Import"),
            ],
            Vec::new(),
        );
        assert_eq!(catalog.suppliers(), ["Promo Import", "Textil Andino"]);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::new(vec![product(1, "A"), product(2, "B")], Vec::new());
        assert_eq!(catalog.product(ProductId::new(2)).unwrap().supplier, "B");
        assert!(catalog.product(ProductId::new(99)).is_none());
    }
}
