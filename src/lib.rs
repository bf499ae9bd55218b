// Devscout - terminal and web client for the developer-tools research agent

pub mod cli;
pub mod client;
pub mod config;
pub mod form;
pub mod models;
pub mod render;
pub mod routes;
pub mod tui;      // Terminal User Interface
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use form::{QueryForm, SubmissionState};
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
