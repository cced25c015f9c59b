//! Account profile and password handlers.

use axum::extract::State;
use axum::{Extension, Json};
use validator::Validate;

use crate::api::dto::MessageResponse;
use crate::api::dto::profile::{ChangePasswordRequest, ProfileRequest, ProfileResponse};
use crate::api::dto::user::UserView;
use crate::application::services::Identity;
use crate::domain::entities::ProfileUpdate;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /me`
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<UserView>, AppError> {
    let user = state.account_service.current_user(&identity.email).await?;
    Ok(Json(user.into()))
}

/// `PUT /profile`
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    payload.validate()?;

    let user = state
        .account_service
        .update_profile(
            &identity.email,
            ProfileUpdate {
                username: payload.username,
                age: payload.age,
                mobile: payload.mobile,
                sex: payload.sex,
            },
        )
        .await?;

    Ok(Json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: user.into(),
    }))
}

/// `POST /change-password`
pub async fn change_password_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .account_service
        .change_password(&identity.email, &payload.password, &payload.new_password)
        .await?;

    tracing::info!(owner = %identity.email, "password changed");
    Ok(Json(MessageResponse::new("Password changed successfully")))
}
