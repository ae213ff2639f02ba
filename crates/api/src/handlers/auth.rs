//! Handler for the `/api/login` endpoint.

use axum::extract::State;
use axum::Json;
use decor_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Opaque token returned on successful login.
///
/// There is no session state behind it: every login receives the same
/// value and nothing ever validates it. Kept for frontend compatibility;
/// DESIGN.md documents why this (and the plaintext credential compare)
/// is not a real authentication mechanism.
const PLACEHOLDER_TOKEN: &str = "dummy-token";

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// POST /api/login
///
/// Exact, case-sensitive username + password match against the `admins`
/// table. Mismatch yields a generic 401 with no lockout and no
/// distinction between unknown user and wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = AdminRepo::find_by_credentials(&state.db, &input.username, &input.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token: PLACEHOLDER_TOKEN.to_string(),
    }))
}
