//! Redirect resolution.
//!
//! A [`Handler`] turns a request path into an HTTP response. Resolvers look the
//! path up in their source and redirect on a hit; on a miss they hand the path,
//! unchanged, to the fallback they were built with. Chains are therefore plain
//! nesting, assembled bottom-up at configuration time.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::decode::{decode_json, decode_yaml};
use crate::error::DecodeError;
use crate::models::PathMap;
use crate::store::{KeyValueStore, SHORTS};

/// Something that can answer a request for a path
pub enum Handler {
    /// Static path map, answers hits with 308 Permanent Redirect
    Map(MapResolver),
    /// Store-backed lookup, answers hits with 307 Temporary Redirect
    Store(StoreResolver),
    /// End of the chain
    Default(DefaultResponder),
}

impl Handler {
    /// Produce the response for `path`, delegating down the chain on a miss
    pub fn serve(&self, path: &str) -> Response {
        match self {
            Handler::Map(resolver) => resolver.serve(path),
            Handler::Store(resolver) => resolver.serve(path),
            Handler::Default(responder) => responder.serve(path),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Map(resolver) => f
                .debug_struct("Map")
                .field("entries", &resolver.paths.len())
                .field("fallback", &resolver.fallback)
                .finish(),
            Handler::Store(resolver) => f
                .debug_struct("Store")
                .field("fallback", &resolver.fallback)
                .finish(),
            Handler::Default(_) => f.write_str("Default"),
        }
    }
}

fn redirect(status: StatusCode, url: &str) -> Option<Response> {
    match HeaderValue::from_str(url) {
        Ok(location) => Some((status, [(header::LOCATION, location)]).into_response()),
        Err(_) => {
            tracing::warn!("Target URL is not a valid Location header: {:?}", url);
            None
        }
    }
}

/// Redirects paths found in a [`PathMap`]
pub struct MapResolver {
    paths: PathMap,
    fallback: Arc<Handler>,
}

impl MapResolver {
    fn serve(&self, path: &str) -> Response {
        let hit = self
            .paths
            .get(path)
            .filter(|url| !url.is_empty())
            .and_then(|url| {
                tracing::debug!("Redirecting {} -> {} (permanent)", path, url);
                redirect(StatusCode::PERMANENT_REDIRECT, url)
            });

        match hit {
            Some(response) => response,
            None => {
                tracing::trace!("No mapping for {}, delegating to fallback", path);
                self.fallback.serve(path)
            }
        }
    }
}

/// Redirects paths found in the `shorts` collection of a [`KeyValueStore`]
pub struct StoreResolver {
    store: Arc<dyn KeyValueStore>,
    fallback: Arc<Handler>,
}

impl StoreResolver {
    /// Read the target for `path`; every failure is reported as a miss
    fn lookup(&self, path: &str) -> Option<String> {
        let bytes = match self.store.get(SHORTS, path) {
            Ok(found) => found?,
            Err(e) => {
                tracing::warn!("Store lookup for {} failed: {:#}", path, e);
                return None;
            }
        };

        match String::from_utf8(bytes) {
            Ok(url) => Some(url),
            Err(_) => {
                tracing::warn!("Stored target for {} is not valid UTF-8", path);
                None
            }
        }
    }

    fn serve(&self, path: &str) -> Response {
        let hit = self
            .lookup(path)
            .filter(|url| !url.is_empty())
            .and_then(|url| {
                tracing::debug!("Redirecting {} -> {} (temporary)", path, url);
                redirect(StatusCode::TEMPORARY_REDIRECT, &url)
            });

        match hit {
            Some(response) => response,
            None => {
                tracing::trace!("No stored entry for {}, delegating to fallback", path);
                self.fallback.serve(path)
            }
        }
    }
}

/// Terminal handler: greets on `/`, 404 everywhere else
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultResponder;

impl DefaultResponder {
    pub const GREETING: &'static str = "Hello, world!";
    pub const NOT_FOUND: &'static str = "404 page not found";

    fn serve(&self, path: &str) -> Response {
        if path == "/" {
            (StatusCode::OK, Self::GREETING).into_response()
        } else {
            (StatusCode::NOT_FOUND, Self::NOT_FOUND).into_response()
        }
    }
}

/// The terminal default handler
pub fn default_handler() -> Arc<Handler> {
    Arc::new(Handler::Default(DefaultResponder))
}

/// Redirect paths in `paths`, otherwise defer to `fallback`
pub fn map_handler(paths: PathMap, fallback: Arc<Handler>) -> Arc<Handler> {
    Arc::new(Handler::Map(MapResolver { paths, fallback }))
}

/// Decode a YAML redirect list and serve it like [`map_handler`]
///
/// The only errors are those of an invalid YAML document.
pub fn yaml_handler(raw: &[u8], fallback: Arc<Handler>) -> Result<Arc<Handler>, DecodeError> {
    let records = decode_yaml(raw)?;
    Ok(map_handler(PathMap::build(records), fallback))
}

/// Decode a JSON redirect list and serve it like [`map_handler`]
pub fn json_handler(raw: &[u8], fallback: Arc<Handler>) -> Result<Arc<Handler>, DecodeError> {
    let records = decode_json(raw)?;
    Ok(map_handler(PathMap::build(records), fallback))
}

/// Redirect paths stored in the `shorts` collection, otherwise defer to `fallback`
pub fn store_handler(store: Arc<dyn KeyValueStore>, fallback: Arc<Handler>) -> Arc<Handler> {
    Arc::new(Handler::Store(StoreResolver { store, fallback }))
}
