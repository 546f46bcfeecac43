//! Wire-format tests: the camelCase JSON the API serves must round into the
//! typed entities, with optional fields and embeds degrading to None.

use mobilinx::model::catalog::{Brand, ProductVariant, Series};

/// Tests a plain brand payload.
///
/// Expected: all fields mapped from camelCase
#[test]
fn deserializes_brand() {
    let payload = r#"{
        "id": "samsung",
        "name": "Samsung",
        "image": "https://img.example/samsung.png",
        "createdAt": "2024-06-01T12:00:00.000Z",
        "updatedAt": "2024-06-02T08:30:00.000Z"
    }"#;

    let brand: Brand = serde_json::from_str(payload).expect("valid brand payload");

    assert_eq!(brand.id, "samsung");
    assert_eq!(brand.name, "Samsung");
    assert_eq!(brand.image.as_deref(), Some("https://img.example/samsung.png"));
    assert_eq!(brand.created_at.to_rfc3339(), "2024-06-01T12:00:00+00:00");
}

/// Tests optional fields that are missing or null.
///
/// Verifies that an absent `image` key, a null `image`, and an absent
/// `brand` embed all come out as None.
///
/// Expected: None for every optional field
#[test]
fn missing_and_null_optionals_become_none() {
    let missing = r#"{
        "id": "galaxy-s",
        "name": "Galaxy S",
        "createdAt": "2024-06-01T12:00:00Z",
        "updatedAt": "2024-06-01T12:00:00Z",
        "brandId": "samsung"
    }"#;
    let series: Series = serde_json::from_str(missing).expect("valid series payload");
    assert_eq!(series.image, None);
    assert_eq!(series.brand, None);
    assert_eq!(series.brand_id, "samsung");

    let null = r#"{
        "id": "galaxy-s",
        "name": "Galaxy S",
        "image": null,
        "createdAt": "2024-06-01T12:00:00Z",
        "updatedAt": "2024-06-01T12:00:00Z",
        "brandId": "samsung",
        "brand": null
    }"#;
    let series: Series = serde_json::from_str(null).expect("valid series payload");
    assert_eq!(series.image, None);
    assert_eq!(series.brand, None);
}

/// Tests a variant payload with nested embeds.
///
/// Verifies that the denormalized model embed, itself embedding series and
/// brand, deserializes through every level.
///
/// Expected: embedded chain resolvable without index lookups
#[test]
fn deserializes_variant_with_nested_embeds() {
    let payload = r#"{
        "id": "v1",
        "name": "Galaxy S24 256GB Black",
        "price": 84999,
        "stock": 12,
        "createdAt": "2024-06-01T12:00:00Z",
        "updatedAt": "2024-06-01T12:00:00Z",
        "productId": "p1",
        "modelId": "s24",
        "model": {
            "id": "s24",
            "name": "Galaxy S24",
            "createdAt": "2024-06-01T12:00:00Z",
            "updatedAt": "2024-06-01T12:00:00Z",
            "seriesId": "galaxy-s",
            "series": {
                "id": "galaxy-s",
                "name": "Galaxy S",
                "createdAt": "2024-06-01T12:00:00Z",
                "updatedAt": "2024-06-01T12:00:00Z",
                "brandId": "samsung",
                "brand": {
                    "id": "samsung",
                    "name": "Samsung",
                    "createdAt": "2024-06-01T12:00:00Z",
                    "updatedAt": "2024-06-01T12:00:00Z"
                }
            }
        }
    }"#;

    let variant: ProductVariant = serde_json::from_str(payload).expect("valid variant payload");

    assert_eq!(variant.price, 84999.0);
    assert_eq!(variant.stock, 12);
    assert_eq!(variant.product, None);

    let model = variant.model.as_ref().expect("embedded model");
    let series = model.series.as_ref().expect("embedded series");
    let brand = series.brand.as_ref().expect("embedded brand");
    assert_eq!(brand.name, "Samsung");
}

/// Tests that entities serialize back to the same camelCase keys.
///
/// Expected: camelCase field names in the output
#[test]
fn serializes_with_camel_case_keys() {
    let payload = r#"{
        "id": "galaxy-s",
        "name": "Galaxy S",
        "createdAt": "2024-06-01T12:00:00Z",
        "updatedAt": "2024-06-01T12:00:00Z",
        "brandId": "samsung"
    }"#;
    let series: Series = serde_json::from_str(payload).expect("valid series payload");

    let value = serde_json::to_value(&series).expect("serializable");
    assert!(value.get("brandId").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("brand_id").is_none());
}
