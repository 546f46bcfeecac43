//! Tests for the group_by_foreign_key builder.

use crate::catalog::indexes::group_by_foreign_key;
use crate::catalog::tests::fixtures;
use crate::model::catalog::Series;

fn key(series: &Series) -> Option<&str> {
    if series.brand_id.is_empty() {
        None
    } else {
        Some(&series.brand_id)
    }
}

/// Tests grouping an empty collection.
///
/// Expected: empty map, no error
#[test]
fn returns_empty_map_for_empty_collection() {
    let series: Vec<Series> = vec![];
    let map = group_by_foreign_key(&series, key);
    assert!(map.is_empty());
}

/// Tests grouping under multiple keys.
///
/// Verifies that every entity lands in exactly the group keyed by its
/// foreign-key value.
///
/// Expected: two groups with the right members
#[test]
fn groups_entities_by_key() {
    let series = vec![
        fixtures::series("s1", "Pro", "b1"),
        fixtures::series("s2", "Air", "b2"),
        fixtures::series("s3", "Max", "b1"),
    ];

    let map = group_by_foreign_key(&series, key);

    assert_eq!(map.len(), 2);
    assert_eq!(map["b1"].len(), 2);
    assert_eq!(map["b2"].len(), 1);
}

/// Tests group-internal ordering.
///
/// Verifies that entities within a group keep the source collection's
/// relative order.
///
/// Expected: s1 before s3 under b1
#[test]
fn preserves_source_order_within_group() {
    let series = vec![
        fixtures::series("s1", "Pro", "b1"),
        fixtures::series("s2", "Air", "b2"),
        fixtures::series("s3", "Max", "b1"),
    ];

    let map = group_by_foreign_key(&series, key);

    let ids: Vec<&str> = map["b1"].iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s3"]);
}

/// Tests omission of absent foreign keys.
///
/// Verifies that entities whose key extractor returns `None` are left out
/// entirely rather than grouped under a sentinel key.
///
/// Expected: one group, the keyless entity in none of them
#[test]
fn omits_entities_without_a_key() {
    let series = vec![
        fixtures::series("s1", "Pro", "b1"),
        fixtures::series("s2", "Orphan", ""),
    ];

    let map = group_by_foreign_key(&series, key);

    assert_eq!(map.len(), 1);
    let total: usize = map.values().map(Vec::len).sum();
    assert_eq!(total, 1);
}

/// Tests completeness of the grouping.
///
/// Verifies that every keyed entity appears in exactly one group.
///
/// Expected: group sizes sum to the keyed entity count
#[test]
fn every_keyed_entity_appears_exactly_once() {
    let series = vec![
        fixtures::series("s1", "Pro", "b1"),
        fixtures::series("s2", "Air", "b2"),
        fixtures::series("s3", "Max", "b1"),
        fixtures::series("s4", "Orphan", ""),
    ];

    let map = group_by_foreign_key(&series, key);

    let total: usize = map.values().map(Vec::len).sum();
    assert_eq!(total, 3);
    for (brand_id, group) in &map {
        for member in group {
            assert_eq!(&member.brand_id, brand_id);
        }
    }
}
