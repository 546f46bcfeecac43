use serde::{Deserialize, Serialize};

/// The response body the catalog API returns when a request fails
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
