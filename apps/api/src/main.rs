mod analysis;
mod config;
mod errors;
mod extract;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::Result;
use ats_core::{Analyzer, TokenPolicy};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerFit API v{}", env!("CARGO_PKG_VERSION"));

    // One tokenization policy per deployment; the scorer and the frequency
    // counter always see the same token stream.
    let analyzer = Analyzer::new(TokenPolicy::WordBoundary);
    info!(
        "Analyzer policy: {:?}; vocabulary terms: {}",
        analyzer.policy(),
        config.vocabulary.len()
    );

    let state = AppState {
        config: config.clone(),
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
