//! Public view of an account.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::User;

/// Account fields safe to return to clients.
///
/// Deliberately has no `password_hash` field, so the hash cannot leak
/// through serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub mobile: Option<String>,
    pub sex: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            age: user.age,
            mobile: user.mobile,
            sex: user.sex,
            created_at: user.created_at,
        }
    }
}
