//! Short link creation handler.

use axum::extract::State;
use axum::{Extension, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /shorten`
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(&payload.long_url, &identity)
        .await?;

    tracing::info!(code = %link.code, owner = %identity.email, "short link created");

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&link.code),
        code: link.code,
        long_url: link.long_url,
        created_at: link.created_at,
    }))
}
