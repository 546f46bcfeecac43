use crate::model::catalog::{Brand, Model, Product, ProductVariant, Series};

/// The five catalog collections as fetched together at page load.
///
/// A snapshot is immutable for the lifetime of a page view; the only way to
/// "update" one is to fetch a fresh snapshot and rebuild every derived
/// structure from it. Collection order follows the API response and is
/// preserved by all engine operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub brands: Vec<Brand>,
    pub series: Vec<Series>,
    pub models: Vec<Model>,
    pub products: Vec<Product>,
    pub variants: Vec<ProductVariant>,
}
