use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use giftwise::config::Config;
use giftwise::llm_client;
use giftwise::routes::build_router;
use giftwise::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Giftwise API v{}", env!("CARGO_PKG_VERSION"));

    // Build app state (LLM client + seeded mock user store)
    let state = AppState::new(config.clone()).await?;
    if state.llm.has_api_key() {
        info!(
            "LLM client initialized (model: {}, endpoint: {})",
            llm_client::MODEL,
            config.llm_api_url
        );
    } else {
        warn!("OPENAI_API_KEY is not set; /api/generate-gifts will return 500");
    }

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
