//! Filter engine: catalog x criteria -> ordered shelf contents.

use tracing::debug;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::search::{FilterCriteria, SortOrder};

/// Filter the full catalog by `criteria`, then sort.
///
/// Always starts from `available`, never from a previous result, so that
/// clearing one facet is never blocked by another facet's earlier narrowing.
pub fn filter_products(available: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut products: Vec<Product> = available
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();
    sort_products(&mut products, criteria.sort);
    products
}

/// Stable sort; `SortOrder::None` leaves the order untouched.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Newest => products.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Holds the fetched catalog and the currently filtered view of it.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    available: Vec<Product>,
    filtered: Vec<Product>,
}

impl FilterEngine {
    /// Create an engine with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over `products`, unfiltered.
    pub fn with_catalog(products: Vec<Product>) -> Self {
        let mut engine = Self::new();
        engine.load(products);
        engine
    }

    /// Replace the catalog. The filtered view becomes the whole catalog.
    pub fn load(&mut self, products: Vec<Product>) {
        self.filtered = products.clone();
        self.available = products;
    }

    /// Recompute the filtered view from the full catalog.
    pub fn apply(&mut self, criteria: &FilterCriteria) -> &[Product] {
        self.filtered = filter_products(&self.available, criteria);
        debug!(
            available = self.available.len(),
            filtered = self.filtered.len(),
            sort = %criteria.sort,
            "filters applied"
        );
        &self.filtered
    }

    /// The full catalog, in fetch order.
    pub fn available(&self) -> &[Product] {
        &self.available
    }

    /// The current filtered and sorted view.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Look up a catalog product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.available.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{numbered, product};
    use crate::money::Money;
    use crate::search::{PriceRange, PRICE_CEILING};

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn priced(prices: &[i64]) -> Vec<Product> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| product(&format!("p{i}"), *price, "Azul", &["M"], "2020-01-01"))
            .collect()
    }

    #[test]
    fn test_facet_composition() {
        let catalog = vec![
            product("a", 100, "Preto", &["M"], "2020-01-01"),
            product("p", 100, "Azul", &["P", "M"], "2020-01-01"),
            product("c", 100, "Azul", &["G"], "2020-01-01"),
        ];
        let criteria = FilterCriteria::new()
            .with_colors(["Azul"])
            .with_sizes(["M"])
            .with_price(PriceRange::widest(Money::from_reais(PRICE_CEILING)));

        let mut engine = FilterEngine::with_catalog(catalog);
        assert_eq!(ids(engine.apply(&criteria)), vec!["p"]);
    }

    #[test]
    fn test_sorting_by_price() {
        let mut engine = FilterEngine::with_catalog(priced(&[50, 10, 30]));
        let prices = |engine: &FilterEngine| -> Vec<i64> {
            engine.filtered().iter().map(|p| p.price.amount_cents / 100).collect()
        };

        engine.apply(&FilterCriteria::new().with_sort(SortOrder::PriceAsc));
        assert_eq!(prices(&engine), vec![10, 30, 50]);

        engine.apply(&FilterCriteria::new().with_sort(SortOrder::PriceDesc));
        assert_eq!(prices(&engine), vec![50, 30, 10]);

        engine.apply(&FilterCriteria::new());
        assert_eq!(prices(&engine), vec![50, 10, 30]);
    }

    #[test]
    fn test_sorting_newest_first() {
        let catalog = vec![
            product("old", 10, "Azul", &["M"], "2019-06-01"),
            product("new", 10, "Azul", &["M"], "2021-06-01"),
            product("mid", 10, "Azul", &["M"], "2020-06-01T12:00:00Z"),
        ];
        let mut engine = FilterEngine::with_catalog(catalog);
        engine.apply(&FilterCriteria::new().with_sort(SortOrder::Newest));
        assert_eq!(ids(engine.filtered()), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut engine = FilterEngine::with_catalog(priced(&[20, 10, 20, 10]));
        engine.apply(&FilterCriteria::new().with_sort(SortOrder::PriceAsc));
        assert_eq!(ids(engine.filtered()), vec!["p1", "p3", "p0", "p2"]);
    }

    #[test]
    fn test_sort_never_reorders_available() {
        let mut engine = FilterEngine::with_catalog(priced(&[50, 10, 30]));
        engine.apply(&FilterCriteria::new().with_sort(SortOrder::PriceAsc));
        assert_eq!(ids(engine.available()), vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn test_filtered_is_subset_of_available() {
        let catalog = vec![
            product("1", 30, "Azul", &["M"], "2020-01-01"),
            product("2", 300, "Rosa", &["G", "GG"], "2020-01-02"),
            product("3", 700, "Azul", &["38"], "2020-01-03"),
            product("4", 45, "Verde", &["U"], "2020-01-04"),
        ];
        let criterias = [
            FilterCriteria::new(),
            FilterCriteria::new().with_colors(["Azul"]),
            FilterCriteria::new().with_sizes(["GG", "U"]),
            FilterCriteria::new().with_colors(["Inexistente"]),
            FilterCriteria::new()
                .with_price(PriceRange::new(Money::from_reais(40), Money::from_reais(300)))
                .with_sort(SortOrder::PriceDesc),
        ];

        let mut engine = FilterEngine::with_catalog(catalog.clone());
        for criteria in &criterias {
            for p in engine.apply(criteria) {
                assert!(catalog.contains(p));
            }
        }
    }

    #[test]
    fn test_clearing_facet_restores_products() {
        let mut engine = FilterEngine::with_catalog(numbered(5));
        let mut criteria = FilterCriteria::new().with_colors(["Preto"]);
        assert!(engine.apply(&criteria).is_empty());

        criteria.clear();
        engine.apply(&criteria);
        assert_eq!(engine.filtered(), engine.available());
    }

    #[test]
    fn test_find() {
        let engine = FilterEngine::with_catalog(numbered(3));
        assert_eq!(
            engine.find(&ProductId::new("2")).map(|p| p.price),
            Some(Money::from_reais(2))
        );
        assert!(engine.find(&ProductId::new("9")).is_none());
    }
}
