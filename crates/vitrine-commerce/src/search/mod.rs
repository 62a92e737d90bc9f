//! Search module.
//!
//! Contains the filter criteria, the filter engine, facet listings and shelf
//! pagination.

mod criteria;
mod engine;
mod facets;
mod pager;

pub use criteria::{FilterCriteria, PriceRange, SortOrder, PRICE_CEILING};
pub use engine::{filter_products, sort_products, FilterEngine};
pub use facets::{
    Facet, FacetKind, FacetSet, FacetValue, PriceBandOption, COLOR_OPTIONS, PRICE_BANDS,
    SIZE_OPTIONS,
};
pub use pager::{ShelfPager, DEFAULT_PAGE_SIZE};
