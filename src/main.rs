//! Xara chat server
//!
//! Serves a single-page chat that forwards each user message to a remote
//! text-generation endpoint and streams the transcript back to the page.

mod api;
mod llm;
mod runtime;
mod state_machine;
mod transcript;

use api::{create_router, AppState};
use llm::LlmConfig;
use runtime::build_production_controller;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript::TranscriptStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xara_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("XARA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let llm_config = LlmConfig::from_env();
    tracing::info!(
        endpoint = %llm_config.endpoint_url,
        authenticated = llm_config.api_token.is_some(),
        "Text generation endpoint configured"
    );
    if llm_config.api_token.is_none() {
        tracing::warn!("No API token configured. Set XARA_API_TOKEN if the endpoint requires one.");
    }

    // One transcript for the lifetime of the process
    let store = Arc::new(TranscriptStore::new());
    let controller = build_production_controller(&llm_config, store)?;
    let state = AppState::new(controller);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Xara chat listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
