use serde::{Deserialize, Serialize};

/// Failure to turn a YAML or JSON source into redirect records
///
/// Raised at configuration time only. No partial record list is ever returned
/// alongside it.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The YAML document is invalid or does not have the `path`/`url` shape
    #[error("invalid YAML redirect list: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON document is invalid or does not have the `path`/`url` shape
    #[error("invalid JSON redirect list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}
