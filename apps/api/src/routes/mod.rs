pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::interview::handlers as interview;
use crate::session::handlers as session;
use crate::state::AppState;

/// Upper bound for a resume upload.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(session::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/analysis",
            get(analysis::handle_get_analysis).post(analysis::handle_analyze),
        )
        .route(
            "/api/v1/sessions/:id/interview",
            get(interview::handle_get_interview),
        )
        .route(
            "/api/v1/sessions/:id/interview/start",
            post(interview::handle_start),
        )
        .route(
            "/api/v1/sessions/:id/interview/answer",
            post(interview::handle_answer),
        )
        .route(
            "/api/v1/sessions/:id/interview/reset",
            post(interview::handle_reset),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
