//! Free-text search across the five catalog collections.
//!
//! Matching is case-insensitive substring containment with no ranking: a
//! record either matches or it does not, and each collection is filtered
//! independently of the others. The whole operation is a pure synchronous
//! function of the snapshot and the query, recomputed by the caller whenever
//! either changes.

use crate::catalog::snapshot::CatalogSnapshot;
use crate::model::catalog::{Brand, Model, Product, ProductVariant, Series};

/// Per-collection search results, each preserving source-collection order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub brands: Vec<Brand>,
    pub series: Vec<Series>,
    pub models: Vec<Model>,
    pub products: Vec<Product>,
    pub variants: Vec<ProductVariant>,
}

impl SearchResults {
    /// True when no collection produced a match.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
            && self.series.is_empty()
            && self.models.is_empty()
            && self.products.is_empty()
            && self.variants.is_empty()
    }
}

/// Case-insensitive substring containment, shared with the per-page list
/// filters (brand list, model filter on the series page).
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Searches all five collections for a free-text query.
///
/// The query is trimmed first; a query that trims to nothing means "no
/// active search" and returns `None`, which is distinct from
/// `Some(SearchResults)` with five empty lists (a search that matched
/// nothing).
///
/// Matching rules: every entity matches on `name`; products additionally on
/// `sku`; variants additionally on their own `id`, which makes serial-style
/// lookup by id fragment work from the same box.
pub fn search(snapshot: &CatalogSnapshot, query: &str) -> Option<SearchResults> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    let needle = trimmed.to_lowercase();
    let matches = |field: &str| field.to_lowercase().contains(&needle);

    Some(SearchResults {
        brands: snapshot
            .brands
            .iter()
            .filter(|b| matches(&b.name))
            .cloned()
            .collect(),
        series: snapshot
            .series
            .iter()
            .filter(|s| matches(&s.name))
            .cloned()
            .collect(),
        models: snapshot
            .models
            .iter()
            .filter(|m| matches(&m.name))
            .cloned()
            .collect(),
        products: snapshot
            .products
            .iter()
            .filter(|p| matches(&p.name) || matches(&p.sku))
            .cloned()
            .collect(),
        variants: snapshot
            .variants
            .iter()
            .filter(|v| matches(&v.name) || matches(&v.id))
            .cloned()
            .collect(),
    })
}
