/**
 * Snake Arena Server Entry Point
 *
 * Loads `.env`, reads the configuration, installs tracing and serves the
 * API until the process is stopped.
 */

use snake_arena::backend::server::{create_app, init_tracing, ServerConfig, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env()?;

    init_tracing(DEFAULT_LOG_FILTER, config.log_format)?;
    tracing::info!("[STARTUP] Server initialization started");

    let addr = config.bind_address();
    let app = create_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
