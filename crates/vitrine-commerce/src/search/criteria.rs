//! Active filter criteria.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Product;
use crate::error::{Result, StorefrontError};
use crate::money::Money;

/// Upper bound, in reais, of the widest price range.
pub const PRICE_CEILING: i64 = 9999;

/// Shelf sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    None,
    /// Newest first.
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortOrder {
    /// Orders offered in the sort dropdown, in display order.
    pub const OPTIONS: [SortOrder; 3] = [
        SortOrder::Newest,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    /// Label shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::Newest => "Mais recentes",
            SortOrder::PriceAsc => "Menor preço",
            SortOrder::PriceDesc => "Maior preço",
        }
    }

    /// Short machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
        }
    }

    /// Parse a dropdown label or machine name. Anything else means no sorting.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Mais recentes" | "newest" => SortOrder::Newest,
            "Menor preço" | "price_asc" => SortOrder::PriceAsc,
            "Maior preço" | "price_desc" => SortOrder::PriceDesc,
            _ => SortOrder::None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// `[0, ceiling]`.
    pub fn widest(ceiling: Money) -> Self {
        Self::new(Money::zero(), ceiling)
    }

    /// Parse a price-band token such as `"51-150"` (reais).
    ///
    /// Returns `None` for anything that is not two finite, non-negative
    /// numbers with `min <= max`.
    pub fn parse_band(token: &str) -> Option<Self> {
        let (min, max) = token.split_once('-')?;
        let min = parse_reais(min)?;
        let max = parse_reais(max)?;
        (min <= max).then(|| Self::new(min, max))
    }

    /// Smallest range covering every band.
    pub fn covering(bands: &[PriceRange]) -> Option<Self> {
        let min = bands.iter().map(|b| b.min).min()?;
        let max = bands.iter().map(|b| b.max).max()?;
        Some(Self::new(min, max))
    }

    /// Check if a price falls inside the range, both ends inclusive.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

fn parse_reais(raw: &str) -> Option<Money> {
    let value: f64 = raw.trim().parse().ok()?;
    if value < 0.0 {
        return None;
    }
    Money::from_decimal(value).ok()
}

/// The facet selections and sort order currently in effect.
///
/// Empty color or size sets and an absent price range place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Accepted colors (OR).
    pub colors: BTreeSet<String>,
    /// Accepted sizes (OR).
    pub sizes: BTreeSet<String>,
    /// Price range; `None` until the price facet is first touched.
    pub price: Option<PriceRange>,
    /// Valid band tokens behind `price`, empty when it was set directly.
    #[serde(default)]
    pub price_bands: BTreeSet<String>,
    /// Sort applied after filtering.
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_colors(colors);
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_sizes(sizes);
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self.price_bands.clear();
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the color selection.
    pub fn set_colors<I, S>(&mut self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
    }

    /// Replace the size selection.
    pub fn set_sizes<I, S>(&mut self, sizes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
    }

    /// Replace the price selection from the checked band tokens.
    ///
    /// Valid bands are merged into one range spanning the lowest minimum and
    /// the highest maximum. When no valid band remains the range becomes
    /// `[0, ceiling]` rather than `None`: once touched, the price facet stays
    /// set.
    pub fn set_price_bands<I, S>(&mut self, tokens: I, ceiling: Money)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checked = BTreeSet::new();
        let mut bands = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            match PriceRange::parse_band(token) {
                Some(band) => {
                    checked.insert(token.trim().to_string());
                    bands.push(band);
                }
                None => warn!(token, "discarding malformed price band"),
            }
        }
        self.price_bands = checked;

        self.price =
            Some(PriceRange::covering(&bands).unwrap_or_else(|| PriceRange::widest(ceiling)));
    }

    /// Set an explicit price range.
    pub fn set_price_range(&mut self, min: Money, max: Money) -> Result<()> {
        if min > max {
            return Err(StorefrontError::InvalidArgument(format!(
                "price range minimum {} is above maximum {}",
                min, max
            )));
        }
        self.price = Some(PriceRange::new(min, max));
        self.price_bands.clear();
        Ok(())
    }

    /// Set the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Reset every facet and the sort order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if no facet constrains the catalog.
    pub fn is_unconstrained(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.price.is_none()
    }

    /// Check if a product passes every active facet.
    pub fn matches(&self, product: &Product) -> bool {
        let color_ok = self.colors.is_empty() || self.colors.contains(&product.color);
        let size_ok = self.sizes.is_empty() || self.sizes.iter().any(|s| product.has_size(s));
        let price_ok = self.price.map_or(true, |range| range.contains(product.price));
        color_ok && size_ok && price_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    fn ceiling() -> Money {
        Money::from_reais(PRICE_CEILING)
    }

    #[test]
    fn test_sort_order_labels() {
        assert_eq!(SortOrder::parse("Menor preço"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::parse("Maior preço"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::parse("Mais recentes"), SortOrder::Newest);
        assert_eq!(SortOrder::parse("price_desc"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::parse(""), SortOrder::None);
        assert_eq!(SortOrder::parse("Relevância"), SortOrder::None);
        for order in SortOrder::OPTIONS {
            assert_eq!(SortOrder::parse(order.label()), order);
        }
    }

    #[test]
    fn test_parse_band() {
        let band = PriceRange::parse_band("51-150").unwrap();
        assert_eq!(band.min, Money::from_reais(51));
        assert_eq!(band.max, Money::from_reais(150));

        assert!(PriceRange::parse_band("abc").is_none());
        assert!(PriceRange::parse_band("10-").is_none());
        assert!(PriceRange::parse_band("x-20").is_none());
        assert!(PriceRange::parse_band("300-100").is_none());
    }

    #[test]
    fn test_price_bands_merge_to_covering_range() {
        let mut criteria = FilterCriteria::new();
        criteria.set_price_bands(["0-50", "bogus", "301-500"], ceiling());
        assert_eq!(
            criteria.price,
            Some(PriceRange::new(Money::zero(), Money::from_reais(500)))
        );
        assert_eq!(
            criteria.price_bands.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["0-50", "301-500"]
        );

        criteria
            .set_price_range(Money::zero(), Money::from_reais(10))
            .unwrap();
        assert!(criteria.price_bands.is_empty());
    }

    #[test]
    fn test_touched_empty_price_facet_is_widest_range() {
        let mut criteria = FilterCriteria::new();
        assert_eq!(criteria.price, None);

        criteria.set_price_bands(Vec::<String>::new(), ceiling());
        assert_eq!(criteria.price, Some(PriceRange::widest(ceiling())));
        assert!(!criteria.is_unconstrained());

        criteria.set_price_bands(["garbage"], ceiling());
        assert_eq!(criteria.price, Some(PriceRange::widest(ceiling())));
        assert!(criteria.price_bands.is_empty());
    }

    #[test]
    fn test_set_price_range_rejects_inverted() {
        let mut criteria = FilterCriteria::new();
        let err = criteria
            .set_price_range(Money::from_reais(100), Money::from_reais(10))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidArgument(_)));
        assert_eq!(criteria.price, None);
    }

    #[test]
    fn test_matches_combines_facets() {
        let p = product("p", 80, "Azul", &["M", "G"], "2020-01-01");
        let q = product("q", 80, "Azul", &["P"], "2020-01-01");
        let r = product("r", 80, "Preto", &["M"], "2020-01-01");

        let criteria = FilterCriteria::new()
            .with_colors(["Azul"])
            .with_sizes(["M", "GG"]);

        assert!(criteria.matches(&p));
        assert!(!criteria.matches(&q));
        assert!(!criteria.matches(&r));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(Money::from_reais(50), Money::from_reais(100));
        assert!(range.contains(Money::from_reais(50)));
        assert!(range.contains(Money::from_reais(100)));
        assert!(!range.contains(Money::new(10_001)));
        assert!(!range.contains(Money::new(4_999)));
    }

    #[test]
    fn test_clear() {
        let mut criteria = FilterCriteria::new()
            .with_colors(["Rosa"])
            .with_sort(SortOrder::Newest)
            .with_price(PriceRange::widest(ceiling()));
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
        assert!(criteria.is_unconstrained());
    }
}
