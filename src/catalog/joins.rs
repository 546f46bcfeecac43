//! Derived views over the catalog indexes.
//!
//! These methods answer the "what belongs to what" questions the pages ask:
//! series under a brand, models under a series, the variants transitively
//! reachable from a brand, and the image/price a variant should display once
//! its parent product is resolved. All of them read the prebuilt
//! [`CatalogIndexes`] without mutating anything; unknown ids yield empty
//! results.

use crate::catalog::indexes::CatalogIndexes;
use crate::model::catalog::{Model, Product, ProductVariant, Series};

impl CatalogIndexes {
    /// Series owned by the given brand, in source-collection order.
    ///
    /// Returns an empty slice when the brand has no series or the id is
    /// unknown.
    pub fn series_of_brand(&self, brand_id: &str) -> &[Series] {
        match self.series_by_brand.get(brand_id) {
            Some(series) => series,
            None => &[],
        }
    }

    /// Models owned by the given series, in source-collection order.
    pub fn models_of_series(&self, series_id: &str) -> &[Model] {
        match self.models_by_series.get(series_id) {
            Some(models) => models,
            None => &[],
        }
    }

    /// Variants attached directly to the given model.
    pub fn variants_of_model(&self, model_id: &str) -> &[ProductVariant] {
        match self.variants_by_model.get(model_id) {
            Some(variants) => variants,
            None => &[],
        }
    }

    /// Variants transitively reachable from the given brand via its series
    /// and their models, in variant-collection order.
    ///
    /// The grouping is precomputed at build time (model → brand inversion
    /// followed by a single variant pass), so each call is a map lookup plus
    /// an optional prefix cap. `limit` bounds the number of returned
    /// variants for shelf-style display; `None` returns the full group.
    pub fn variants_of_brand(&self, brand_id: &str, limit: Option<usize>) -> &[ProductVariant] {
        let variants = match self.variants_by_brand.get(brand_id) {
            Some(variants) => variants.as_slice(),
            None => &[],
        };
        match limit {
            Some(limit) => &variants[..variants.len().min(limit)],
            None => variants,
        }
    }

    /// Resolves a variant's parent product, preferring the denormalized
    /// embed and falling back to the product index.
    pub fn product_of_variant<'a>(&'a self, variant: &'a ProductVariant) -> Option<&'a Product> {
        variant
            .product
            .as_ref()
            .or_else(|| self.product_by_id.get(&variant.product_id))
    }

    /// Resolves a variant's model, preferring the denormalized embed.
    pub fn model_of_variant<'a>(&'a self, variant: &'a ProductVariant) -> Option<&'a Model> {
        variant
            .model
            .as_ref()
            .or_else(|| self.model_by_id.get(&variant.model_id))
    }

    /// The image a variant card should show: the variant's own image, else
    /// its product's image, else none.
    pub fn display_image<'a>(&'a self, variant: &'a ProductVariant) -> Option<&'a str> {
        variant.image.as_deref().or_else(|| {
            self.product_of_variant(variant)
                .and_then(|product| product.image.as_deref())
        })
    }

    /// The price a variant card should show.
    ///
    /// A price of zero or below means "price not set". The variant's own
    /// price wins when set; otherwise the parent product's price is used
    /// when set; otherwise zero.
    pub fn display_price(&self, variant: &ProductVariant) -> f64 {
        if variant.price > 0.0 {
            return variant.price;
        }
        self.product_of_variant(variant)
            .map(|product| product.price)
            .filter(|price| *price > 0.0)
            .unwrap_or(0.0)
    }
}

/// Variants belonging to one product, filtered out of the full variant
/// collection in source order. Used by the product detail page, which
/// fetches the whole collection and narrows it client-side.
pub fn variants_of_product<'a>(
    variants: &'a [ProductVariant],
    product_id: &str,
) -> Vec<&'a ProductVariant> {
    variants
        .iter()
        .filter(|variant| variant.product_id == product_id)
        .collect()
}
