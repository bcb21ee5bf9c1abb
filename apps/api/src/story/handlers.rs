//! Axum route handlers for the Story API.

use axum::{extract::State, Json};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::story::models::{StoryRecord, StoryRequest, StoryResponse};

/// POST /generate-story
///
/// Returns the one-sentence template story for the given theme.
/// Any string is accepted, including the empty string.
pub async fn handle_generate_story(
    State(state): State<AppState>,
    request: StoryRequest,
) -> Result<Json<StoryResponse>, AppError> {
    debug!(theme_bytes = request.theme.len(), "generating story");

    let story = state.storyteller.tell(&request.theme).await?;

    Ok(Json(StoryResponse { story }))
}

/// POST /api/v1/stories/tale
///
/// Returns the multi-line tale wrapped in a fresh story record.
/// Nothing is stored; the client keeps its own gallery.
pub async fn handle_create_tale(
    State(state): State<AppState>,
    request: StoryRequest,
) -> Result<Json<StoryRecord>, AppError> {
    if request.theme.is_empty() {
        return Err(AppError::Validation("theme cannot be empty".to_string()));
    }

    let content = state.storyteller.tale(&request.theme).await?;
    let record = StoryRecord::new(request.theme, content);
    debug!(id = %record.id, "created tale");

    Ok(Json(record))
}
