//! Tests for the models_of_series join.

use crate::catalog::indexes::CatalogIndexes;
use crate::catalog::tests::fixtures;

/// Tests looking up models for a known series.
///
/// Expected: the series's models in source order
#[test]
fn returns_models_of_known_series() {
    let mut snapshot = fixtures::sample_snapshot();
    snapshot.models.push(fixtures::model("m2", "X2", "s1"));

    let indexes = CatalogIndexes::build(&snapshot);

    let ids: Vec<&str> = indexes
        .models_of_series("s1")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["m1", "m2"]);
}

/// Tests looking up models for an unknown series id.
///
/// Expected: empty slice
#[test]
fn returns_empty_for_unknown_series() {
    let indexes = CatalogIndexes::build(&fixtures::sample_snapshot());

    assert!(indexes.models_of_series("s-missing").is_empty());
}
