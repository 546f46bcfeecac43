//! Tests for price_range.

use crate::catalog::price::{price_range, PriceRange};
use crate::catalog::tests::fixtures;
use crate::model::catalog::ProductVariant;

fn priced(prices: &[f64]) -> Vec<ProductVariant> {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| fixtures::variant(&format!("v{i}"), "Variant", "p1", "m1", *price, 1))
        .collect()
}

/// Tests the empty-group edge case.
///
/// Verifies that an empty variant list yields "no price range" instead of a
/// NaN/Infinity-style artifact or a panic.
///
/// Expected: None
#[test]
fn returns_none_for_empty_group() {
    assert_eq!(price_range(&[]), None);
}

/// Tests the worked example from the landing page shelves.
///
/// Verifies that an unset (zero) price is excluded from the minimum while
/// the maximum still ranges over all entries.
///
/// Expected: min 100, max 100
#[test]
fn ignores_unset_prices_in_minimum() {
    let variants = priced(&[100.0, 0.0]);

    assert_eq!(
        price_range(&variants),
        Some(PriceRange { min: 100.0, max: 100.0 })
    );
}

/// Tests a spread of set prices.
///
/// Expected: min 25, max 180
#[test]
fn spans_lowest_and_highest_set_price() {
    let variants = priced(&[60.0, 25.0, 180.0]);

    assert_eq!(
        price_range(&variants),
        Some(PriceRange { min: 25.0, max: 180.0 })
    );
}

/// Tests a group where no variant has a set price.
///
/// Verifies the documented rule: with nothing positive to report, the range
/// is absent rather than zero-filled.
///
/// Expected: None
#[test]
fn returns_none_when_no_price_is_set() {
    let variants = priced(&[0.0, -5.0]);

    assert_eq!(price_range(&variants), None);
}

/// Tests a single-variant group.
///
/// Expected: min and max both equal to the one price
#[test]
fn collapses_to_single_price_for_one_variant() {
    let variants = priced(&[75.0]);

    assert_eq!(
        price_range(&variants),
        Some(PriceRange { min: 75.0, max: 75.0 })
    );
}

/// Tests that a negative price never becomes the minimum.
///
/// Expected: min from positive entries only
#[test]
fn excludes_negative_prices_from_minimum() {
    let variants = priced(&[-10.0, 40.0, 90.0]);

    assert_eq!(
        price_range(&variants),
        Some(PriceRange { min: 40.0, max: 90.0 })
    );
}
