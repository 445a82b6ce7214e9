mod config;
mod error;
mod routes;
mod webhook;

use chat_client::state::connection::Connectivity;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // Reachability is informational only; the widget re-probes from the browser.
    match webhook::startup_check(&config).await {
        Ok(Some(Connectivity::Connected)) => {
            tracing::info!(url = ?config.webhook_url, "webhook reachable");
        }
        Ok(Some(state)) => {
            tracing::warn!(url = ?config.webhook_url, ?state, "webhook not reachable");
        }
        Ok(None) => tracing::info!("CHAT_WEBHOOK_URL not set; skipping webhook check"),
        Err(e) => tracing::warn!(error = %e, "webhook check failed"),
    }

    let app = routes::app()?;
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "chat widget listening");
    axum::serve(listener, app).await?;
    Ok(())
}
