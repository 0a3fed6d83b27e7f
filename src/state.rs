use crate::config::Config;
use crate::resolve::Handler;
use crate::store::SledStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Entry point of the redirect chain
    pub handler: Arc<Handler>,
    /// Present when redirects are served from the store
    pub store: Option<SledStore>,
    pub config: Arc<Config>,
}
