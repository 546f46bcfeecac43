//! In-memory catalog engine.
//!
//! The remote API serves five flat collections (brands, series, models,
//! products, product variants) that pages fetch once per view. This module
//! turns a fetched [`CatalogSnapshot`] into O(1) lookup structures
//! ([`CatalogIndexes`]) and derives the views the pages render: series of a
//! brand, models of a series, the variants transitively reachable from a
//! brand, display image/price fallbacks, price ranges, and free-text search.
//!
//! Everything here is pure and synchronous: the engine only ever reads an
//! already-fetched snapshot and never fails. Dangling foreign keys in the
//! source data degrade to empty results, never to a panic. Whenever a page
//! re-fetches, it rebuilds the indexes from the new snapshot so derived views
//! never mix entities from two fetch generations.

pub mod indexes;
pub mod joins;
pub mod price;
pub mod search;
pub mod snapshot;


pub use indexes::CatalogIndexes;
pub use price::{price_range, PriceRange};
pub use search::{contains_ignore_case, search, SearchResults};
pub use snapshot::CatalogSnapshot;
