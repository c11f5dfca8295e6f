use crate::config::Config;
use anyhow::Context;
use axum::Router;
use axum::http::header::HeaderValue;
use http::{Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod error;
mod routers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let bind_address = config.bind_address.clone();

    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .context("Invalid frontend origin")?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::HOST,
        ]);

    // Create shared state
    let shared_state = Arc::new(AppState {
        config: Arc::new(config),
    });

    // Build the app router
    let app = create_router(&shared_state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    log::info!("Listening on {bind_address}");

    // Start the server using the listener
    axum::serve(listener, app)
        .await
        .context("Error running the server")
}

// Create Router
pub fn create_router(shared_state: &Arc<AppState>) -> Router {
    Router::new().merge(routers::pipeline::router(shared_state.clone()))
}
