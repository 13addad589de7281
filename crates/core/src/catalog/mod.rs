//! Client-side catalog filtering and sorting.
//!
//! A listing fetches its products once per category or search context and
//! then answers every filter change from memory:
//!
//! 1. sale quick filter (`on-sale` tag)
//! 2. new-arrival quick filter (`new-arrival` tag)
//! 3. sizes: any overlap with the selected set
//! 4. colors: any overlap with the selected set
//! 5. price: inclusive range
//! 6. stable sort by name, price or recency
//!
//! Stages 1-5 are independent predicates. Only the sort depends on order.

mod engine;
mod facets;
mod filter;
mod session;

pub use engine::{FilterEngine, FilterStage, RecencySort, apply_stages, compute};
pub use facets::FilterFacets;
pub use filter::{FilterState, PriceRange, SortBy, SortOption, SortOptionError, SortOrder};
pub use session::CatalogSession;
