//! Request and response DTOs.
//!
//! JSON field names are camelCase. Request string fields default to empty
//! when absent, so missing fields fail `validator` checks as a 400 rather
//! than a deserialization rejection.

pub mod auth;
pub mod links;
pub mod profile;
pub mod shorten;
pub mod user;

use serde::Serialize;

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
