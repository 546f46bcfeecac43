//! Price-range derivation for a set of variants.

use crate::model::catalog::ProductVariant;

/// Lowest set price and highest price across a group of variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    /// Minimum over variants with a positive price.
    pub min: f64,
    /// Maximum over all variants in the group.
    pub max: f64,
}

/// Computes the price range of a variant group.
///
/// A price of zero or below means "price not set" and is excluded from the
/// minimum; the maximum ranges over every entry. Returns `None` for an empty
/// group or when no variant has a positive price, so callers never see a
/// made-up number where the data has none.
///
/// # Example
/// Variants priced `[100.0, 0.0]` yield `min: 100.0, max: 100.0`: the
/// unset price neither drags the minimum to zero nor raises the maximum.
pub fn price_range(variants: &[ProductVariant]) -> Option<PriceRange> {
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;

    for variant in variants {
        if variant.price > 0.0 {
            min = Some(min.map_or(variant.price, |m| m.min(variant.price)));
        }
        max = Some(max.map_or(variant.price, |m| m.max(variant.price)));
    }

    Some(PriceRange {
        min: min?,
        max: max?,
    })
}
