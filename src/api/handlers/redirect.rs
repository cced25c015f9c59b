//! Public short code redirect.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /{code}`
///
/// Responds 302 rather than 303/307 so clients treat the target as the
/// canonical location without caching it permanently.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]))
}
