//! Profile and password management DTOs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::user::UserView;

/// Optional international phone number; empty is accepted as "unset".
static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?[0-9]{7,15})?$").expect("valid regex literal"));

/// Body of `PUT /profile`. Carries the full set of editable fields;
/// omitted optional fields are cleared.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: Option<i32>,
    #[validate(regex(path = *MOBILE_REGEX, message = "must be a phone number"))]
    pub mobile: Option<String>,
    pub sex: Option<String>,
}

/// Response for a successful profile update.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserView,
}

/// Body of `POST /change-password`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub new_password: String,
}
