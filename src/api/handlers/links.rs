//! Owner-scoped link listing and bulk deletion handlers.

use axum::extract::State;
use axum::{Extension, Json};
use serde_json::json;

use crate::api::dto::links::{DeleteLinksRequest, DeleteLinksResponse, IdSelection, LinkView};
use crate::application::services::{DeleteSelection, Identity};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /my-urls`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<LinkView>>, AppError> {
    let links = state.link_service.list_owned(&identity.email).await?;

    let views = links
        .into_iter()
        .map(|link| LinkView {
            short_url: state.link_service.short_url(&link.code),
            code: link.code,
            long_url: link.long_url,
            created_at: link.created_at,
        })
        .collect();

    Ok(Json(views))
}

/// `DELETE /my-urls`
///
/// `ids` is either an array of codes or the string sentinel `"ALL"`.
/// Any other string is rejected before reaching the service.
pub async fn delete_links_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<DeleteLinksRequest>,
) -> Result<Json<DeleteLinksResponse>, AppError> {
    let selection = match payload.ids {
        IdSelection::Codes(codes) => DeleteSelection::Codes(codes),
        IdSelection::Sentinel(s) if s == "ALL" => DeleteSelection::All,
        IdSelection::Sentinel(other) => {
            return Err(AppError::bad_request(
                "Invalid ids value",
                json!({ "expected": "an array of codes or \"ALL\"", "provided": other }),
            ));
        }
    };

    let deleted_count = state
        .link_service
        .delete_owned(selection, &identity.email)
        .await?;

    tracing::info!(owner = %identity.email, deleted_count, "bulk link deletion");
    Ok(Json(DeleteLinksResponse { deleted_count }))
}
