//! Facet option lists and per-option product counts for the filter sidebar.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::{FilterCriteria, PriceRange};

/// Colors offered in the color facet.
pub const COLOR_OPTIONS: [&str; 10] = [
    "Amarelo", "Azul", "Branco", "Cinza", "Laranja", "Verde", "Vermelho", "Preto", "Rosa", "Vinho",
];

/// Sizes offered in the size facet.
pub const SIZE_OPTIONS: [&str; 8] = ["P", "M", "G", "GG", "U", "36", "38", "40"];

/// A checkbox in the price facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBandOption {
    /// Text next to the checkbox.
    pub label: &'static str,
    /// Band token handed to the criteria when checked.
    pub token: &'static str,
}

/// Price bands offered in the price facet.
pub const PRICE_BANDS: [PriceBandOption; 5] = [
    PriceBandOption { label: "de R$0 até R$50", token: "0-50" },
    PriceBandOption { label: "de R$51 até R$150", token: "51-150" },
    PriceBandOption { label: "de R$151 até R$300", token: "151-300" },
    PriceBandOption { label: "de R$301 até R$500", token: "301-500" },
    PriceBandOption { label: "a partir de R$500", token: "500-9999" },
];

/// Which facet a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Color,
    Size,
    Price,
}

/// One facet group with its options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Heading shown above the options.
    pub name: String,
    pub kind: FacetKind,
    pub values: Vec<FacetValue>,
}

/// A single facet option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// Display label.
    pub label: String,
    /// Value handed back to the criteria.
    pub value: String,
    /// Catalog products carrying this value.
    pub count: usize,
    /// Whether the option is part of the active criteria.
    pub selected: bool,
}

/// The three sidebar facets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetSet {
    pub colors: Facet,
    pub sizes: Facet,
    pub prices: Facet,
}

impl FacetSet {
    /// Count every option over the full catalog and mark active selections.
    ///
    /// A price band is marked selected only when its token was checked.
    pub fn from_catalog(available: &[Product], criteria: &FilterCriteria) -> Self {
        let colors = COLOR_OPTIONS
            .iter()
            .map(|color| FacetValue {
                label: color.to_string(),
                value: color.to_string(),
                count: available.iter().filter(|p| p.color == *color).count(),
                selected: criteria.colors.contains(*color),
            })
            .collect();

        let sizes = SIZE_OPTIONS
            .iter()
            .map(|size| FacetValue {
                label: size.to_string(),
                value: size.to_string(),
                count: available.iter().filter(|p| p.has_size(size)).count(),
                selected: criteria.sizes.contains(*size),
            })
            .collect();

        let prices = PRICE_BANDS
            .iter()
            .filter_map(|option| {
                let band = PriceRange::parse_band(option.token)?;
                Some(FacetValue {
                    label: option.label.to_string(),
                    value: option.token.to_string(),
                    count: available.iter().filter(|p| band.contains(p.price)).count(),
                    selected: criteria.price_bands.contains(option.token),
                })
            })
            .collect();

        Self {
            colors: Facet {
                name: "Cores".to_string(),
                kind: FacetKind::Color,
                values: colors,
            },
            sizes: Facet {
                name: "Tamanhos".to_string(),
                kind: FacetKind::Size,
                values: sizes,
            },
            prices: Facet {
                name: "Faixa de preço".to_string(),
                kind: FacetKind::Price,
                values: prices,
            },
        }
    }

    /// Groups in sidebar order.
    pub fn groups(&self) -> [&Facet; 3] {
        [&self.colors, &self.sizes, &self.prices]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;
    use crate::money::Money;

    #[test]
    fn test_price_band_tokens_parse() {
        for option in PRICE_BANDS {
            assert!(PriceRange::parse_band(option.token).is_some(), "{}", option.token);
        }
    }

    #[test]
    fn test_facet_counts() {
        let catalog = vec![
            product("1", 40, "Azul", &["M"], "2020-01-01"),
            product("2", 200, "Azul", &["M", "G"], "2020-01-01"),
            product("3", 600, "Preto", &["40"], "2020-01-01"),
        ];
        let mut criteria = FilterCriteria::new().with_colors(["Azul"]);
        criteria.set_price_bands(["0-50", "301-500"], Money::from_reais(9999));

        let facets = FacetSet::from_catalog(&catalog, &criteria);

        let azul = facets.colors.values.iter().find(|v| v.value == "Azul").unwrap();
        assert_eq!(azul.count, 2);
        assert!(azul.selected);

        let m = facets.sizes.values.iter().find(|v| v.value == "M").unwrap();
        assert_eq!(m.count, 2);
        assert!(!m.selected);

        let counts: Vec<usize> = facets.prices.values.iter().map(|v| v.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 0, 1]);
        let selected: Vec<bool> = facets.prices.values.iter().map(|v| v.selected).collect();
        assert_eq!(selected, vec![true, false, false, true, false]);
    }

    #[test]
    fn test_untouched_or_empty_price_facet_selects_no_band() {
        let catalog = vec![product("1", 40, "Azul", &["M"], "2020-01-01")];
        let mut criteria = FilterCriteria::new();
        criteria.set_price_bands(Vec::<String>::new(), Money::from_reais(9999));

        let facets = FacetSet::from_catalog(&catalog, &criteria);

        assert!(facets.prices.values.iter().all(|v| !v.selected));
    }

    #[test]
    fn test_second_band_spans_51_to_150() {
        let band = PRICE_BANDS[1];
        assert_eq!(band.token, "51-150");
        assert_eq!(band.label, "de R$51 até R$150");

        let range = PriceRange::parse_band(band.token).unwrap();
        assert!(range.contains(Money::from_reais(120)));
        assert!(range.contains(Money::from_reais(150)));
        assert!(!range.contains(Money::from_reais(151)));
    }
}
