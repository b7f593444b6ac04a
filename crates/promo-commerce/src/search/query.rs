//! The catalog query pipeline: conjunctive filters, then a stable sort.

use std::cmp::Reverse;

use crate::catalog::Product;
use crate::search::filter::{parse_price_bound, FilterSpec, SortKey};

/// Filter and rank `products` according to `spec`.
///
/// Deterministic: the same inputs produce the same ordered list, and ties
/// under the sort key keep their input order. The function cannot fail;
/// an unknown category or supplier simply matches nothing.
pub fn query(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let min_price = parse_price_bound(&spec.min_price);
    let max_price = parse_price_bound(&spec.max_price);
    let search = spec.search.to_lowercase();

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| spec.category.is_all() || p.category == spec.category)
        .filter(|p| spec.supplier.is_empty() || p.supplier == spec.supplier)
        .filter(|p| min_price.map_or(true, |min| p.base_price.amount() >= min))
        .filter(|p| max_price.map_or(true, |max| p.base_price.amount() <= max))
        .filter(|p| {
            search.is_empty()
                || p.name.to_lowercase().contains(&search)
                || p.sku.to_lowercase().contains(&search)
        })
        .cloned()
        .collect();

    // slice::sort_by_key is stable, which is what keeps ties in input order.
    match spec.sort {
        Some(SortKey::Name) => matched.sort_by_key(|p| p.name.to_lowercase()),
        Some(SortKey::Price) => matched.sort_by_key(|p| p.base_price),
        Some(SortKey::Stock) => matched.sort_by_key(|p| Reverse(p.stock)),
        None => {}
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceBreak;
    use crate::money::Pesos;

    fn product(id: u32, name: &str, category: &str, price: i64, stock: i64) -> Product {
        Product::new(
            id,
            name,
            category,
            "Promo Import",
            format!("SKU-{id:03}"),
            Pesos::new(price),
            stock,
        )
    }

    fn ten_product_catalog() -> Vec<Product> {
        vec![
            product(1, "Polera", "textil", 4990, 320),
            product(2, "Taza", "drinkware", 2990, 800),
            product(3, "Gorro", "textil", 3490, 400),
            product(4, "Pendrive", "tecnologia", 6990, 350),
            product(5, "Polerón", "textil", 12990, 150),
            product(6, "Botella", "drinkware", 8990, 220),
            product(7, "Bolígrafo", "escritura", 890, 2500),
            product(8, "Parka", "textil", 24990, 60),
            product(9, "Bolsa", "bolsas", 990, 3000),
            product(10, "Lápiz", "escritura", 450, 5000),
        ]
    }

    #[test]
    fn test_filter_by_category_sorted_by_name() {
        let results = query(
            &ten_product_catalog(),
            &FilterSpec::new().with_category("textil"),
        );
        let names: Vec<_> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Gorro", "Parka", "Polera", "Polerón"]);
    }

    #[test]
    fn test_all_category_matches_everything() {
        let catalog = ten_product_catalog();
        let results = query(&catalog, &FilterSpec::new().unsorted());
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let results = query(
            &ten_product_catalog(),
            &FilterSpec::new().with_category("muebles"),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_combined_filters_and_search() {
        let catalog = vec![
            Product::new(
                1,
                "Camiseta",
                "textil",
                "Textil Andino",
                "TS-01",
                Pesos::new(3000),
                100,
            ),
            Product::new(
                2,
                "Campera",
                "textil",
                "Textil Andino",
                "CP-01",
                Pesos::new(8000),
                50,
            ),
        ];
        let spec = FilterSpec::new()
            .with_search("CAM")
            .with_min_price("1000")
            .with_max_price("5000")
            .with_sort(SortKey::Price);
        let results = query(&catalog, &spec);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Camiseta");
    }

    #[test]
    fn test_supplier_filter_is_exact_and_case_sensitive() {
        let mut catalog = ten_product_catalog();
        catalog[0].supplier = "Textil Andino".to_string();
        let results = query(
            &catalog,
            &FilterSpec::new().with_supplier("Textil Andino"),
        );
        assert_eq!(results.len(), 1);
        assert!(query(&catalog, &FilterSpec::new().with_supplier("textil andino")).is_empty());
    }

    #[test]
    fn test_search_matches_sku_case_insensitively() {
        let results = query(
            &ten_product_catalog(),
            &FilterSpec::new().with_search("sku-004"),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pendrive");
    }

    #[test]
    fn test_price_bounds() {
        let catalog = ten_product_catalog();
        let cheap = query(&catalog, &FilterSpec::new().with_max_price("1000"));
        assert_eq!(cheap.len(), 3); // Bolígrafo, Bolsa, Lápiz
        let mid = query(
            &catalog,
            &FilterSpec::new().with_min_price("3000").with_max_price("7000"),
        );
        let names: Vec<_> = mid.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Gorro", "Pendrive", "Polera"]);
    }

    #[test]
    fn test_garbage_price_bounds_are_ignored() {
        let catalog = ten_product_catalog();
        let all = query(&catalog, &FilterSpec::new());
        for garbage in ["abc", "-5", "1e3", " "] {
            let results = query(
                &catalog,
                &FilterSpec::new()
                    .with_min_price(garbage)
                    .with_max_price(garbage),
            );
            assert_eq!(results.len(), all.len(), "bound {garbage:?} not ignored");
        }
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let results = query(
            &ten_product_catalog(),
            &FilterSpec::new().with_sort(SortKey::Price),
        );
        let prices: Vec<_> = results.iter().map(|p| p.base_price.amount()).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_sort_by_stock_descending() {
        let results = query(
            &ten_product_catalog(),
            &FilterSpec::new().with_sort(SortKey::Stock),
        );
        let stocks: Vec<_> = results.iter().map(|p| p.stock).collect();
        let mut sorted = stocks.clone();
        sorted.sort_by_key(|s| Reverse(*s));
        assert_eq!(stocks, sorted);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let catalog = vec![
            product(1, "Alfa", "textil", 1000, 5),
            product(2, "Beta", "textil", 1000, 5),
            product(3, "Gamma", "textil", 1000, 5),
        ];
        let results = query(&catalog, &FilterSpec::new().with_sort(SortKey::Price));
        let ids: Vec<_> = results.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_no_sort_keeps_input_order() {
        let results = query(&ten_product_catalog(), &FilterSpec::new().unsorted());
        let ids: Vec<_> = results.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_tightening_filters_never_enlarges() {
        let catalog = ten_product_catalog();
        let base = query(&catalog, &FilterSpec::new());
        let specs = [
            FilterSpec::new().with_category("textil"),
            FilterSpec::new().with_search("po"),
            FilterSpec::new().with_min_price("2000"),
            FilterSpec::new().with_max_price("9000"),
            FilterSpec::new().with_supplier("Promo Import"),
            FilterSpec::new()
                .with_category("textil")
                .with_search("po")
                .with_min_price("2000")
                .with_max_price("9000"),
        ];
        for spec in specs {
            assert!(query(&catalog, &spec).len() <= base.len());
        }
    }

    #[test]
    fn test_query_ignores_price_breaks() {
        // Breaks affect quoting, never catalog ranking.
        let mut catalog = ten_product_catalog();
        catalog[0].price_breaks = vec![PriceBreak::new(10, Pesos::new(1))];
        let filtered = query(&catalog, &FilterSpec::new().with_min_price("4000"));
        assert!(filtered.iter().any(|p| p.id.as_u32() == 1));
    }
}
