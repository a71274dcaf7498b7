//! HTTP surface of the service: shared state, router, and listener.

pub mod handlers;

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::database::Database;
use crate::error::Result;
use crate::query_engine::QueryEngine;

use handlers::{
    health_handler, home_handler, precipitation_handler, start_end_handler, start_handler,
    stations_handler, tobs_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub engine: Arc<QueryEngine>,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            engine: Arc::new(QueryEngine::new()),
        }
    }
}

/// Build the router with every published route
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/{start}", get(start_handler))
        .route("/api/v1.0/{start}/{end}", get(start_end_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until the process is stopped
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!("Climate API listening on http://{}", local);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
