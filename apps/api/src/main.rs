mod auth;
mod config;
mod db;
mod errors;
mod extract;
mod generation;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::sessions::SessionStore;
use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::source::JSearchSource;
use crate::jobs::store::JobStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and the job store
    let pool = create_pool(&config.database_url).await?;
    let store = JobStore::new(pool);
    store.initialize().await?;
    info!("Job store initialized");

    // Initialize the JSearch job source
    let source = Arc::new(JSearchSource::new(config.rapidapi_key.clone()));
    info!("JSearch job source initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the in-memory session store
    let sessions = SessionStore::new(Duration::from_secs(config.session_ttl_minutes * 60));
    info!(
        "Session store initialized (TTL: {} minutes)",
        config.session_ttl_minutes
    );

    // Build app state
    let state = AppState {
        store,
        source,
        llm,
        sessions,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
