use std::sync::Arc;

use crate::error::DecodeError;
use crate::models::PathMap;
use crate::resolve::{Handler, default_handler, json_handler, map_handler, store_handler, yaml_handler};
use crate::store::KeyValueStore;

/// Paths that are always mapped, whatever other sources are configured
pub const BUILTIN_PATHS: &[(&str, &str)] = &[
    (
        "/urlshort-godoc",
        "https://godoc.org/github.com/gophercises/urlshort",
    ),
    ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
];

/// Everything a deployment may have configured as a redirect source
#[derive(Default)]
pub struct Sources {
    pub yaml: Option<Vec<u8>>,
    pub json: Option<Vec<u8>>,
    pub store: Option<Arc<dyn KeyValueStore>>,
}

impl Sources {
    fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.yaml.is_some() {
            names.push("yaml");
        }
        if self.json.is_some() {
            names.push("json");
        }
        if self.store.is_some() {
            names.push("store");
        }
        names
    }
}

/// Assemble the handler chain and return its entry point
///
/// The built-in map sits over the default responder and is the entry point
/// when nothing else is configured. Each configured source then replaces the
/// entry point in the order YAML, JSON, store. File sources fall back to the
/// built-in map; the store falls back straight to the default responder.
/// Only the last configured source is reachable from the top of the chain.
///
/// # Errors
/// Returns an error if a YAML or JSON source does not decode
pub fn build_chain(sources: Sources) -> Result<Arc<Handler>, DecodeError> {
    let configured = sources.configured();
    if let Some((active, shadowed)) = configured.split_last() {
        if !shadowed.is_empty() {
            tracing::warn!(
                "Several redirect sources configured; only {} is reachable, shadowed: {}",
                active,
                shadowed.join(", ")
            );
        }
    }

    let default = default_handler();
    let builtin: PathMap = BUILTIN_PATHS.iter().copied().collect();
    let builtin = map_handler(builtin, default.clone());

    let mut entry = builtin.clone();

    if let Some(raw) = sources.yaml {
        entry = yaml_handler(&raw, builtin.clone())?;
        tracing::info!("Serving redirects from YAML source");
    }

    if let Some(raw) = sources.json {
        entry = json_handler(&raw, builtin.clone())?;
        tracing::info!("Serving redirects from JSON source");
    }

    if let Some(store) = sources.store {
        entry = store_handler(store, default);
        tracing::info!("Serving redirects from store");
    }

    Ok(entry)
}
