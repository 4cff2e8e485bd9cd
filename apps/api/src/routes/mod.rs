pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::generation::handlers as generation;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth + saved jobs
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route(
            "/api/v1/saved",
            get(auth::handle_list_saved).post(auth::handle_save_job),
        )
        // Job search
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/search", post(jobs::handle_search))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // AI generation
        .route(
            "/api/v1/generate/letter",
            post(generation::handle_generate_letter),
        )
        .route(
            "/api/v1/generate/resume",
            post(generation::handle_generate_resume),
        )
        .route("/api/v1/optimize", post(generation::handle_optimize_resume))
        .route("/api/v1/match-score", post(generation::handle_match_score))
        .route("/api/v1/download", post(generation::handle_download))
        .with_state(state)
}
