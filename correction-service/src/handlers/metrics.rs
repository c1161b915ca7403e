use crate::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}
