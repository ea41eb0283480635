mod config;
mod document;
mod errors;
mod models;
mod routes;
mod state;
mod suggestions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::session::SessionStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::StaticSuggestionSource;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

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

    info!("Starting Resume Builder API v{}", env!("CARGO_PKG_VERSION"));

    let suggestions = Arc::new(StaticSuggestionSource::new(Duration::from_millis(
        config.suggestion_delay_ms,
    )));
    info!(
        "Static suggestion source initialized (delay: {}ms)",
        config.suggestion_delay_ms
    );

    let sessions = SessionStore::new();
    let idle_ttl = Duration::from_secs(config.session_idle_ttl_secs);
    sessions.spawn_sweeper(
        idle_ttl,
        SESSION_SWEEP_INTERVAL.min(idle_ttl).max(Duration::from_secs(1)),
    );
    info!("Session sweeper started (idle TTL: {}s)", idle_ttl.as_secs());

    let state = AppState {
        sessions,
        suggestions,
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
