pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skill lexicon
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route(
            "/api/v1/skills/extract",
            post(handlers::handle_extract_skills),
        )
        // Matching
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/rank", post(handlers::handle_rank))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
