use utoipa::OpenApi;

use crate::error::{HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "urlshort API",
        version = "1.0.0",
        description = "Redirects short paths to target URLs from static maps, YAML/JSON lists, or a store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::redirect::redirect_handler
    ),
    components(
        schemas(
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "redirect", description = "Short path resolution")
    )
)]
pub struct ApiDoc;
