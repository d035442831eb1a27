pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/score", post(handlers::handle_score))
        .route(
            "/api/v1/analysis/score/upload",
            post(handlers::handle_score_upload),
        )
        .route("/api/v1/analysis/bulk", post(handlers::handle_bulk))
        .route("/api/v1/analysis/skills", post(handlers::handle_skills))
        .with_state(state)
}
