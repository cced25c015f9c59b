//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// Allowed values for the optional `sex` profile field.
///
/// The empty string means "unset" and is accepted for parity with the
/// profile form, which submits an empty selection as `""`.
pub const ALLOWED_SEX_VALUES: &[&str] = &["male", "female", "other", ""];

/// A registered account.
///
/// `password_hash` is a PHC-formatted Argon2id string. It must never be
/// serialized into a response body; API views are built from
/// [`crate::api::dto::user::UserView`] which omits it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
    pub mobile: Option<String>,
    pub sex: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Profile fields replaced by a profile update.
///
/// The update always carries the full set of editable fields; `None` clears
/// the corresponding optional field.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub age: Option<i32>,
    pub mobile: Option<String>,
    pub sex: Option<String>,
}
