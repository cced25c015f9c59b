//! Bearer token authentication middleware.
//!
//! Runs on every owner-scoped route. Extracts `Authorization: Bearer`,
//! verifies the token, and injects [`Identity`] into request extensions for
//! handlers to consume via `Extension<Identity>`.

use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_auth::AuthBearer;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

pub async fn layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "No token",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })?;

    let identity = state.token_service.verify(&token)?;

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
