//! Authentication handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::models::User;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    /// Accepted but never verified
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Sign-in endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    body.validate().map_err(|e| AppError::Validation {
        field: "email".to_string(),
        message: e.to_string(),
    })?;

    let service = AuthService::new(state.catalog.clone(), state.config.session.secret.clone());
    let (token, user) = service.login(&body.email)?;

    Ok(Json(LoginResponse { token, user }))
}

/// Session bootstrap: return the identity restored from the presented token
pub async fn current_session(CurrentSession(session): CurrentSession) -> Json<User> {
    Json(session.user().clone())
}
