use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, openapi_handler, redirect_handler};
use crate::routes;
use crate::state::AppState;

/// Build the service router
///
/// Operational routes are matched first; every other request is resolved
/// through the redirect chain held in `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::OPENAPI, get(openapi_handler))
        .fallback(redirect_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Sources, build_chain};
    use crate::config::Config;
    use crate::store::SledStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app(sources: Sources, store: Option<SledStore>) -> Router {
        let config = Config {
            yaml_file: None,
            json_file: None,
            db_path: None,
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
        };

        router(AppState {
            handler: build_chain(sources).unwrap(),
            store,
            config: Arc::new(config),
        })
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_route_is_not_redirected() {
        let app = setup_test_app(
            Sources {
                json: Some(br#"[{"path":"/health","url":"https://elsewhere.example"}]"#.to_vec()),
                ..Default::default()
            },
            None,
        );

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn test_openapi_route() {
        let app = setup_test_app(Sources::default(), None);

        let response = app.oneshot(get_request(routes::OPENAPI)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["title"], "urlshort API");
    }

    #[tokio::test]
    async fn test_store_and_static_sources_share_router() {
        let store = SledStore::temporary().unwrap();
        store.prepare_shorts().unwrap();

        let store_app = setup_test_app(
            Sources {
                store: Some(Arc::new(store.clone())),
                ..Default::default()
            },
            Some(store),
        );
        let static_app = setup_test_app(
            Sources {
                json: Some(
                    br#"[{"path":"/urlshort","url":"https://github.com/gophercises/urlshort"}]"#
                        .to_vec(),
                ),
                ..Default::default()
            },
            None,
        );

        let from_store = store_app.oneshot(get_request("/urlshort")).await.unwrap();
        let from_static = static_app.oneshot(get_request("/urlshort")).await.unwrap();

        assert_eq!(from_store.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(from_static.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            from_store.headers().get(header::LOCATION),
            from_static.headers().get(header::LOCATION)
        );
    }
}
