pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::story::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-story", post(handlers::handle_generate_story))
        .route("/api/v1/stories/tale", post(handlers::handle_create_tale))
        .with_state(state)
}
