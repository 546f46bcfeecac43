//! Tests for the multi-hop variants_of_brand join.

use crate::catalog::indexes::CatalogIndexes;
use crate::catalog::tests::fixtures;

/// Tests the worked single-brand example.
///
/// Verifies that both variants of the Acme X1 model are reachable from the
/// brand, in variant-collection order.
///
/// Expected: [v1, v2]
#[test]
fn returns_variants_reachable_from_brand() {
    let indexes = CatalogIndexes::build(&fixtures::sample_snapshot());

    let ids: Vec<&str> = indexes
        .variants_of_brand("b1", None)
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(ids, vec!["v1", "v2"]);
}

/// Tests brand isolation.
///
/// Verifies that variants reachable from one brand never leak into another
/// brand's group.
///
/// Expected: each brand sees only its own variants
#[test]
fn does_not_leak_variants_across_brands() {
    let mut snapshot = fixtures::sample_snapshot();
    snapshot.brands.push(fixtures::brand("b2", "Globex"));
    snapshot.series.push(fixtures::series("s2", "Air", "b2"));
    snapshot.models.push(fixtures::model("m2", "A1", "s2"));
    snapshot
        .variants
        .push(fixtures::variant("v3", "A1 Silver", "p1", "m2", 80.0, 2));

    let indexes = CatalogIndexes::build(&snapshot);

    let acme: Vec<&str> = indexes
        .variants_of_brand("b1", None)
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    let globex: Vec<&str> = indexes
        .variants_of_brand("b2", None)
        .iter()
        .map(|v| v.id.as_str())
        .collect();

    assert_eq!(acme, vec!["v1", "v2"]);
    assert_eq!(globex, vec!["v3"]);
}

/// Tests the shelf-style result cap.
///
/// Verifies that a limit returns the group's prefix and that a limit larger
/// than the group is harmless.
///
/// Expected: [v1] with limit 1, [v1, v2] with limit 10
#[test]
fn caps_results_at_limit() {
    let indexes = CatalogIndexes::build(&fixtures::sample_snapshot());

    assert_eq!(indexes.variants_of_brand("b1", Some(1)).len(), 1);
    assert_eq!(indexes.variants_of_brand("b1", Some(1))[0].id, "v1");
    assert_eq!(indexes.variants_of_brand("b1", Some(10)).len(), 2);
}

/// Tests an unknown brand id.
///
/// Expected: empty slice
#[test]
fn returns_empty_for_unknown_brand() {
    let indexes = CatalogIndexes::build(&fixtures::sample_snapshot());

    assert!(indexes.variants_of_brand("b-missing", None).is_empty());
    assert!(indexes.variants_of_brand("b-missing", Some(8)).is_empty());
}

/// Tests a variant with a dangling model reference.
///
/// Verifies that a variant pointing at a nonexistent model is excluded from
/// every brand group.
///
/// Expected: dangling variant in no group
#[test]
fn excludes_variant_with_dangling_model() {
    let mut snapshot = fixtures::sample_snapshot();
    snapshot
        .variants
        .push(fixtures::variant("v9", "Ghost", "p1", "m-missing", 10.0, 1));

    let indexes = CatalogIndexes::build(&snapshot);

    let ids: Vec<&str> = indexes
        .variants_of_brand("b1", None)
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(ids, vec!["v1", "v2"]);
}
