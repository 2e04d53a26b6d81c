//! HTTP server startup.

use crate::api::{AppState, create_app};
use crate::config::ServerConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};

/// Binds the configured address and serves the game until the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
#[instrument(skip(config), fields(address = %config.bind_address()))]
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::default());
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server ready at http://{}/", config.bind_address());

    axum::serve(listener, app).await?;
    Ok(())
}
