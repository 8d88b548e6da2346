use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sentiscope_api::classifier::ModelState;
use sentiscope_api::config::Config;
use sentiscope_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sentiscope-api v{}", env!("CARGO_PKG_VERSION"));

    // Load the model before accepting traffic: load-once, serve-many.
    // A load failure degrades to the fixed fallback instead of exiting.
    let model_id = config.model_id.clone();
    let model = tokio::task::spawn_blocking(move || ModelState::load(&model_id)).await?;
    let state = AppState::new(model);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    sentiscope_api::serve(listener, state).await
}
