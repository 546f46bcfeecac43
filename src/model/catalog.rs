//! Wire-format entities served by the remote catalog API.
//!
//! The API exposes five flat collections related through string foreign keys:
//! brands own series, series own models, and product variants reference both a
//! product and a model. Responses may carry optional denormalized embeds
//! (`series.brand`, `variant.product`, ...) which must never be assumed
//! present; the catalog engine resolves missing embeds through its indexes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub brand_id: String,
    /// Denormalized owning brand, present on some API responses only.
    #[serde(default)]
    pub brand: Option<Brand>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub series_id: String,
    /// Denormalized owning series, which may itself embed its brand.
    #[serde(default)]
    pub series: Option<Series>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Catalog code, intended to be unique across products.
    pub sku: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
    /// Units on hand; negative values indicate bad upstream data and are
    /// treated as out of stock by the presentation layer.
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_id: String,
    #[serde(default)]
    pub product: Option<Product>,
    pub model_id: String,
    #[serde(default)]
    pub model: Option<Model>,
}
