use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::error::{AppError, AppResult};
use super::AppState;
use crate::models::{ComicResponse, StoryRequest};

/// `POST /generate-comic`
pub async fn generate_comic(
    State(state): State<AppState>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> AppResult<Json<ComicResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected comic request: {}", rejection.body_text());
        AppError::BadRequest("Invalid input".to_string())
    })?;

    tracing::info!("Generating comic for story ({} chars)", request.story.len());
    let images = state.pipeline.generate(&request.story).await?;

    Ok(Json(ComicResponse { images }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
