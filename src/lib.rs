//! Short path redirector.
//!
//! Request paths are mapped to target URLs by a chain of [`resolve::Handler`]s.
//! Sources are a static map, YAML or JSON redirect lists, or the `shorts`
//! collection of a sled store; anything unmapped falls through to a default
//! responder.

pub mod api_doc;
pub mod app;
pub mod chain;
pub mod config;
pub mod decode;
pub mod error;
pub mod handlers;
pub mod models;
pub mod resolve;
pub mod routes;
pub mod state;
pub mod store;
