//! HTTP Routes
//!
//! - `/` - Query form (GET renders it, POST submits it)
//! - `/api/health` - Health check

pub mod form;
pub mod health;

use axum::Router;
use crate::models::AppState;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(form::router(state.clone()))
        .merge(health::router(state))
        .layer(TraceLayer::new_for_http())
}
