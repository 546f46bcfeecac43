//! Lookup structures built from a catalog snapshot.
//!
//! This module provides the two primitive index builders (by-id maps and
//! one-to-many foreign-key groupings) and [`CatalogIndexes`], which assembles
//! every lookup structure the join engine needs in a single linear pass over
//! each collection.

use std::collections::HashMap;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::model::catalog::{Brand, Model, Product, ProductVariant, Series};

/// Builds a map from id to entity.
///
/// Ids are expected to be unique; if two entities share an id, the later one
/// in iteration order wins. Callers should treat duplicates as a data-quality
/// problem in the source collection, not as an error here.
///
/// # Arguments
/// - `items` - Source collection, iterated in order
/// - `id` - Extracts the id of an entity
pub fn index_by_id<T: Clone>(items: &[T], id: impl Fn(&T) -> &str) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.insert(id(item).to_string(), item.clone());
    }
    map
}

/// Groups a collection by a foreign-key value.
///
/// Entities whose key is `None` are omitted entirely; within a group,
/// entities keep the source collection's relative order. Safe on empty input
/// (produces an empty map).
///
/// # Arguments
/// - `items` - Source collection, iterated in order
/// - `key` - Extracts the foreign-key value, or `None` when absent
pub fn group_by_foreign_key<T: Clone>(
    items: &[T],
    key: impl Fn(&T) -> Option<&str>,
) -> HashMap<String, Vec<T>> {
    let mut map: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        if let Some(key) = key(item) {
            map.entry(key.to_string()).or_default().push(item.clone());
        }
    }
    map
}

/// Treats an empty foreign-key string as an absent reference.
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Forward and reverse lookup structures over one catalog snapshot.
///
/// Built once per fetch with [`CatalogIndexes::build`] and then queried
/// through the join methods in [`crate::catalog::joins`]. Building is linear
/// in the total collection size: the multi-hop brand → series → model chain
/// is inverted into [`Self::brand_by_model`] with one pass over series and
/// one over models, so grouping variants under brands afterwards is a single
/// pass over the variant collection rather than a per-brand scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogIndexes {
    pub brand_by_id: HashMap<String, Brand>,
    pub series_by_id: HashMap<String, Series>,
    pub model_by_id: HashMap<String, Model>,
    pub product_by_id: HashMap<String, Product>,
    pub variant_by_id: HashMap<String, ProductVariant>,

    /// Series grouped under their owning brand id.
    pub series_by_brand: HashMap<String, Vec<Series>>,
    /// Models grouped under their owning series id.
    pub models_by_series: HashMap<String, Vec<Model>>,
    /// Variants grouped under their model id.
    pub variants_by_model: HashMap<String, Vec<ProductVariant>>,

    /// Model id → brand id, following model → series → brand.
    /// Models whose series is unknown or has no brand are absent.
    pub brand_by_model: HashMap<String, String>,
    /// Variants grouped under the brand transitively reachable through
    /// their model. Group order follows the variant collection.
    pub variants_by_brand: HashMap<String, Vec<ProductVariant>>,
}

impl CatalogIndexes {
    /// Builds every lookup structure from one snapshot.
    ///
    /// Pure function of the snapshot: calling it twice on the same snapshot
    /// yields structurally equal indexes. Tolerates dangling foreign keys
    /// (the affected entity simply joins no group) and empty collections.
    pub fn build(snapshot: &CatalogSnapshot) -> Self {
        let series_by_brand = group_by_foreign_key(&snapshot.series, |s| non_empty(&s.brand_id));
        let models_by_series = group_by_foreign_key(&snapshot.models, |m| non_empty(&m.series_id));
        let variants_by_model =
            group_by_foreign_key(&snapshot.variants, |v| non_empty(&v.model_id));

        // Invert the brand → series → model chain: series id → brand id,
        // then model id → brand id. Last write wins on duplicate ids, in
        // line with index_by_id.
        let mut brand_by_series: HashMap<&str, &str> = HashMap::new();
        for series in &snapshot.series {
            if let Some(brand_id) = non_empty(&series.brand_id) {
                brand_by_series.insert(&series.id, brand_id);
            }
        }
        let mut brand_by_model: HashMap<String, String> = HashMap::new();
        for model in &snapshot.models {
            if let Some(brand_id) = brand_by_series.get(model.series_id.as_str()) {
                brand_by_model.insert(model.id.clone(), (*brand_id).to_string());
            }
        }

        let mut variants_by_brand: HashMap<String, Vec<ProductVariant>> = HashMap::new();
        for variant in &snapshot.variants {
            if let Some(brand_id) = brand_by_model.get(&variant.model_id) {
                variants_by_brand
                    .entry(brand_id.clone())
                    .or_default()
                    .push(variant.clone());
            }
        }

        Self {
            brand_by_id: index_by_id(&snapshot.brands, |b| &b.id),
            series_by_id: index_by_id(&snapshot.series, |s| &s.id),
            model_by_id: index_by_id(&snapshot.models, |m| &m.id),
            product_by_id: index_by_id(&snapshot.products, |p| &p.id),
            variant_by_id: index_by_id(&snapshot.variants, |v| &v.id),
            series_by_brand,
            models_by_series,
            variants_by_model,
            brand_by_model,
            variants_by_brand,
        }
    }
}
