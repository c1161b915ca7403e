use crate::models::{CorrectionRequest, CorrectionResponse};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

/// `POST /correct`: proxy the submitted text to the completion provider.
pub async fn correct_handler(
    State(state): State<AppState>,
    payload: Result<Json<CorrectionRequest>, JsonRejection>,
) -> Result<Json<CorrectionResponse>, AppError> {
    let Json(request) = payload?;

    tracing::info!(
        text = request.text.as_deref().unwrap_or_default(),
        "Received text for correction"
    );

    let corrected_text = state
        .correction_service
        .correct(request.non_empty_text())
        .await?;

    Ok(Json(CorrectionResponse { corrected_text }))
}
