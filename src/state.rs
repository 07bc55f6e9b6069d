//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! landing document never changes, so it is rendered once at startup and
//! handed out as refcounted `Bytes`; serving it never copies the page.

use std::sync::Arc;

use axum::body::Bytes;

use crate::config::ServerConfig;
use crate::landing;

/// Clone is required by Axum; all fields are cheap refcounted handles.
#[derive(Clone)]
pub struct AppState {
    pub landing_page: Bytes,
    pub environment: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self { landing_page: Bytes::from(landing::document()), environment: Arc::from(config.environment.as_str()) }
    }
}
