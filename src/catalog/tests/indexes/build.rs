//! Tests for CatalogIndexes::build.

use crate::catalog::indexes::CatalogIndexes;
use crate::catalog::snapshot::CatalogSnapshot;
use crate::catalog::tests::fixtures;

/// Tests building indexes from an empty snapshot.
///
/// Verifies that every lookup structure comes out empty without errors.
///
/// Expected: all maps empty
#[test]
fn builds_empty_indexes_from_empty_snapshot() {
    let indexes = CatalogIndexes::build(&CatalogSnapshot::default());

    assert!(indexes.brand_by_id.is_empty());
    assert!(indexes.series_by_brand.is_empty());
    assert!(indexes.brand_by_model.is_empty());
    assert!(indexes.variants_by_brand.is_empty());
}

/// Tests idempotence of index building.
///
/// Verifies that building twice from the same snapshot yields structurally
/// equal indexes.
///
/// Expected: equal CatalogIndexes values
#[test]
fn building_twice_yields_equal_indexes() {
    let snapshot = fixtures::sample_snapshot();

    let first = CatalogIndexes::build(&snapshot);
    let second = CatalogIndexes::build(&snapshot);

    assert_eq!(first, second);
}

/// Tests the inverted model → brand map.
///
/// Verifies that a model reachable through brand → series → model maps back
/// to its brand.
///
/// Expected: m1 → b1
#[test]
fn maps_model_back_to_brand() {
    let indexes = CatalogIndexes::build(&fixtures::sample_snapshot());

    assert_eq!(indexes.brand_by_model.get("m1").map(String::as_str), Some("b1"));
}

/// Tests dangling series references.
///
/// Verifies that a model whose series does not exist joins no brand group
/// and causes no failure.
///
/// Expected: model absent from brand_by_model, variant absent from
/// variants_by_brand
#[test]
fn tolerates_dangling_series_reference() {
    let mut snapshot = fixtures::sample_snapshot();
    snapshot.models.push(fixtures::model("m9", "Ghost", "s-missing"));
    snapshot
        .variants
        .push(fixtures::variant("v9", "Ghost Black", "p1", "m9", 50.0, 1));

    let indexes = CatalogIndexes::build(&snapshot);

    assert!(!indexes.brand_by_model.contains_key("m9"));
    let acme: Vec<&str> = indexes
        .variants_of_brand("b1", None)
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(acme, vec!["v1", "v2"]);
}

/// Tests grouping of variants under brands at build time.
///
/// Verifies the single-pass variant grouping produces the same set as the
/// transitive closure over series and models.
///
/// Expected: variants_by_brand equals the closure for every brand
#[test]
fn variant_grouping_matches_transitive_closure() {
    let mut snapshot = fixtures::sample_snapshot();
    snapshot.brands.push(fixtures::brand("b2", "Globex"));
    snapshot.series.push(fixtures::series("s2", "Air", "b2"));
    snapshot.models.push(fixtures::model("m2", "A1", "s2"));
    snapshot
        .variants
        .push(fixtures::variant("v3", "A1 Silver", "p1", "m2", 80.0, 2));

    let indexes = CatalogIndexes::build(&snapshot);

    for brand in &snapshot.brands {
        let grouped: Vec<&str> = indexes
            .variants_of_brand(&brand.id, None)
            .iter()
            .map(|v| v.id.as_str())
            .collect();

        let mut expected = vec![];
        for v in &snapshot.variants {
            let reachable = snapshot.series.iter().any(|s| {
                s.brand_id == brand.id
                    && snapshot
                        .models
                        .iter()
                        .any(|m| m.series_id == s.id && v.model_id == m.id)
            });
            if reachable {
                expected.push(v.id.as_str());
            }
        }

        assert_eq!(grouped, expected, "brand {}", brand.id);
    }
}
