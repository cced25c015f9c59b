//! Registration and login handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::api::dto::MessageResponse;
use crate::api::dto::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /register`
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .account_service
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    tracing::info!(username = %payload.username, "user registered");
    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// `POST /login`
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let (token, user) = state
        .account_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}
