//! Owner-scoped link listing and bulk deletion DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One link in the `GET /my-urls` listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkView {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `DELETE /my-urls`.
#[derive(Debug, Deserialize)]
pub struct DeleteLinksRequest {
    pub ids: IdSelection,
}

/// `ids` accepts either an explicit code array or the `"ALL"` sentinel.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdSelection {
    Codes(Vec<String>),
    Sentinel(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLinksResponse {
    pub deleted_count: u64,
}
