mod config;
mod errors;
mod gateway;
mod routes;
mod stages;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::AnthropicGateway;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting 슬기로운 논문생활 API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model gateway. The API key is not checked here: a missing
    // or invalid key surfaces as an authentication failure on first call.
    let gateway = Arc::new(AnthropicGateway::new(config.anthropic_api_key.clone()));
    info!("Model gateway initialized (model: {})", gateway::MODEL);

    let state = AppState { gateway };

    // The frontend is static-hosted on a separate origin, so CORS mirrors any
    // origin and allows credentials. The service has no caller auth of its own.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
