//! OncoForms Server binary

use anyhow::Result;
use oncoforms_server::routes::paths;
use oncoforms_server::{create_app, OncoformsServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; deployed environments set variables directly
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = OncoformsServer::new()?;

    // Startup connectivity probe. A failure here is logged, not fatal:
    // statements fail individually until the database becomes reachable.
    if server.db.is_healthy().await {
        info!("Successfully connected to PostgreSQL");
    } else {
        error!("Failed to connect to PostgreSQL, continuing without a live connection");
    }

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], server.config.port));
    info!(%addr, server = %server.config.name, "Starting HTTP server");
    info!("Available endpoints:");
    info!("  GET  {}", paths::health::TEST_CONNECTION);
    info!("  POST {}", paths::forms::SUBMIT_ASSESSMENT);
    info!("  POST {}", paths::forms::SUBMIT_CONSENT);
    info!("  POST {}", paths::forms::SUBMIT_CTSIMULATION);
    info!("  POST {}", paths::forms::SUBMIT_FORM);
    info!("  GET  {}", paths::forms::GET_FORMS);

    let app = create_app(server);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
