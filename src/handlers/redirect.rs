use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::Uri, response::Response};

/// Fallback handler - resolves any other path through the redirect chain
///
/// Accepts every method. The response is whatever the chain produces: a 308
/// for static sources, a 307 for the store, or the default responder's answer.
#[utoipa::path(
    get,
    path = routes::REDIRECT,
    params(
        ("path" = String, Path, description = "Short path to resolve")
    ),
    responses(
        (status = 307, description = "Temporary redirect to a stored target"),
        (status = 308, description = "Permanent redirect to a configured target"),
        (status = 200, description = "Greeting, for the root path only", body = String),
        (status = 404, description = "Path is not mapped by any source", body = String)
    ),
    tag = "redirect"
)]
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Response {
    state.handler.serve(uri.path())
}
