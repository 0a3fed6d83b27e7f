use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use urlshort::app;
use urlshort::chain::{Sources, build_chain};
use urlshort::config::Config;
use urlshort::state::AppState;
use urlshort::store::SledStore;

fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tracing::info!("urlshort starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = match &config.db_path {
        Some(path) => {
            let store = SledStore::open(path)?;
            store.prepare_shorts()?;
            Some(store)
        }
        None => None,
    };

    let sources = Sources {
        yaml: config.yaml_file.as_deref().map(read_source).transpose()?,
        json: config.json_file.as_deref().map(read_source).transpose()?,
        store: store
            .clone()
            .map(|s| Arc::new(s) as Arc<dyn urlshort::store::KeyValueStore>),
    };
    let handler = build_chain(sources).context("Failed to build redirect chain")?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        handler,
        store,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Starting the server on {}", addr);

    axum::serve(listener, app::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
