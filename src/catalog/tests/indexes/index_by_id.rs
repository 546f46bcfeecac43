//! Tests for the index_by_id builder.

use crate::catalog::indexes::index_by_id;
use crate::catalog::tests::fixtures;
use crate::model::catalog::Brand;

/// Tests indexing an empty collection.
///
/// Verifies that the builder is safe to call with no input.
///
/// Expected: empty map
#[test]
fn returns_empty_map_for_empty_collection() {
    let brands: Vec<Brand> = vec![];
    let map = index_by_id(&brands, |b| &b.id);
    assert!(map.is_empty());
}

/// Tests indexing a collection with unique ids.
///
/// Verifies that every entity is reachable under its own id.
///
/// Expected: one entry per entity
#[test]
fn indexes_every_entity_under_its_id() {
    let brands = vec![fixtures::brand("b1", "Acme"), fixtures::brand("b2", "Globex")];

    let map = index_by_id(&brands, |b| &b.id);

    assert_eq!(map.len(), 2);
    assert_eq!(map["b1"].name, "Acme");
    assert_eq!(map["b2"].name, "Globex");
}

/// Tests duplicate-id handling.
///
/// Verifies that when two entities share an id, the later one in iteration
/// order wins.
///
/// Expected: last write wins
#[test]
fn later_entity_wins_on_duplicate_id() {
    let brands = vec![fixtures::brand("b1", "Acme"), fixtures::brand("b1", "Acme Corp")];

    let map = index_by_id(&brands, |b| &b.id);

    assert_eq!(map.len(), 1);
    assert_eq!(map["b1"].name, "Acme Corp");
}
