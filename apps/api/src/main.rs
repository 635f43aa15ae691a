use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profiler::llm_client::{self, LlmClient};
use profiler::routes::build_router;
use profiler::state::AppState;
use profiler::{Config, ProfileGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing OPENAI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting profiler v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::from_config(&config)?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        llm.base_url()
    );

    let state = AppState {
        generator: ProfileGenerator::new(Arc::new(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
