//! Landing page route.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// `GET /` — the pre-rendered landing document.
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.landing_page)
}
