//! Router construction and server startup.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handlers::{available_count, list_names, register, remove};
use crate::store::SharedPlayerStore;

/// Web server configuration
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3001 }
    }
}

impl ServerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3001),
        }
    }
}

/// Shared state for web handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedPlayerStore,
    /// Where the store is persisted after each mutation
    pub store_path: String,
}

/// Build the application router. Cross-origin requests are allowed from any
/// origin; the service carries no credentials.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/register", post(register))
        .route("/names", get(list_names))
        .route("/remove", delete(remove))
        .route("/available-count", get(available_count))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the web server for the codename registry
pub async fn start_web_server(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> &'static str {
    "Codename Registry Running"
}
