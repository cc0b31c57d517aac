mod api_doc;
mod config;
mod handlers;
mod models;
mod routes;
mod state;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("greeting-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        config: Arc::new(config),
        started_at: Instant::now(),
    };
    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("greeting-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
