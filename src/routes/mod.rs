//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This service only hosts the landing page and a health probe. The login
//! flow and the API documentation linked from the page are served by other
//! deployments; requests for them here fall through to the 404 fallback.

pub mod health;
pub mod landing;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

#[must_use]
pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(landing::index))
        .route("/health", get(health::health))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(config))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
