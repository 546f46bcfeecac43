//! Remote catalog client.
//!
//! Thin request/response layer over the catalog REST API. Collections are
//! fetched whole; detail pages pair a single-entity fetch with a filtered
//! child fetch. The layer never retries (retry is a user action at the page
//! boundary), and callers cancel in-flight requests implicitly by dropping
//! the future that owns them.

use thiserror::Error;

/// Base URL of the catalog API. Overridable at compile time for test or
/// staging deployments.
pub const API_BASE: &str = match option_env!("MOBILINX_API_BASE") {
    Some(base) => base,
    None => "https://mobilinxbd.vercel.app/api/v1",
};

/// Failure modes of a catalog API request.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network failure, timeout).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// A single-entity lookup came back 404. Distinct from a fetch failure:
    /// the request worked, the entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
}

#[cfg(feature = "web")]
mod requests {
    use serde::de::DeserializeOwned;

    use super::{FetchError, API_BASE};
    use crate::catalog::snapshot::CatalogSnapshot;
    use crate::model::api::ErrorDto;
    use crate::model::catalog::{Brand, Model, Product, ProductVariant, Series};

    async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
        use reqwasm::http::Request;

        let response = Request::get(&format!("{API_BASE}{path}"))
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        match response.status() {
            200 => response
                .json::<T>()
                .await
                .map_err(|e| FetchError::Parse(e.to_string())),
            status => {
                let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
                    error_dto.error
                } else {
                    response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string())
                };
                Err(FetchError::Status { status, message })
            }
        }
    }

    /// A 404 on a whole collection means "nothing there yet", not an error.
    async fn get_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, FetchError> {
        match get_json(path).await {
            Err(FetchError::Status { status: 404, .. }) => Ok(Vec::new()),
            other => other,
        }
    }

    /// A 404 on a single entity is a real absence, surfaced as such.
    async fn get_entity<T: DeserializeOwned>(
        path: &str,
        entity: &'static str,
    ) -> Result<T, FetchError> {
        match get_json(path).await {
            Err(FetchError::Status { status: 404, .. }) => Err(FetchError::NotFound { entity }),
            other => other,
        }
    }

    pub async fn fetch_brands() -> Result<Vec<Brand>, FetchError> {
        get_collection("/brands").await
    }

    pub async fn fetch_brand(id: &str) -> Result<Brand, FetchError> {
        get_entity(&format!("/brands/{id}"), "Brand").await
    }

    pub async fn fetch_series() -> Result<Vec<Series>, FetchError> {
        get_collection("/series").await
    }

    pub async fn fetch_series_by_brand(brand_id: &str) -> Result<Vec<Series>, FetchError> {
        get_collection(&format!("/series?brandId={brand_id}")).await
    }

    pub async fn fetch_single_series(id: &str) -> Result<Series, FetchError> {
        get_entity(&format!("/series/{id}"), "Series").await
    }

    pub async fn fetch_models() -> Result<Vec<Model>, FetchError> {
        get_collection("/models").await
    }

    pub async fn fetch_models_by_series(series_id: &str) -> Result<Vec<Model>, FetchError> {
        get_collection(&format!("/models?seriesId={series_id}")).await
    }

    pub async fn fetch_single_model(id: &str) -> Result<Model, FetchError> {
        get_entity(&format!("/models/{id}"), "Model").await
    }

    pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
        get_collection("/products").await
    }

    pub async fn fetch_product(id: &str) -> Result<Product, FetchError> {
        get_entity(&format!("/products/{id}"), "Product").await
    }

    pub async fn fetch_product_variants() -> Result<Vec<ProductVariant>, FetchError> {
        get_collection("/product-variants").await
    }

    pub async fn fetch_variants_by_model(model_id: &str) -> Result<Vec<ProductVariant>, FetchError> {
        get_collection(&format!("/product-variants?modelId={model_id}")).await
    }

    /// Fetches all five collections concurrently. The snapshot is ready only
    /// once every request resolves; the first failure wins otherwise.
    pub async fn load_catalog() -> Result<CatalogSnapshot, FetchError> {
        let (brands, series, models, products, variants) = futures::join!(
            fetch_brands(),
            fetch_series(),
            fetch_models(),
            fetch_products(),
            fetch_product_variants(),
        );

        Ok(CatalogSnapshot {
            brands: brands?,
            series: series?,
            models: models?,
            products: products?,
            variants: variants?,
        })
    }
}

#[cfg(feature = "web")]
pub use requests::*;
