//! Axum route handlers for login, logout, and saved jobs.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::models::session::SavedJob;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SavedJobsResponse {
    pub jobs: Vec<SavedJob>,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if request.username != state.config.demo_username
        || request.password != state.config.demo_password
    {
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.create(&request.username);
    info!("User '{}' logged in", request.username);

    Ok(Json(LoginResponse {
        token,
        username: request.username,
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>, user: AuthedUser) -> StatusCode {
    state.sessions.remove(user.token);
    info!("User '{}' logged out", user.username);
    StatusCode::NO_CONTENT
}

/// POST /api/v1/saved
pub async fn handle_save_job(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(request): Json<SaveJobRequest>,
) -> Result<StatusCode, AppError> {
    let job = SavedJob {
        title: request.title,
        company: request.company,
        location: request.location,
        saved_at: Utc::now(),
    };

    if !state.sessions.save_job(user.token, job) {
        return Err(AppError::Unauthorized);
    }
    Ok(StatusCode::CREATED)
}

/// GET /api/v1/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<SavedJobsResponse>, AppError> {
    let jobs = state
        .sessions
        .saved_jobs(user.token)
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(SavedJobsResponse { jobs }))
}
