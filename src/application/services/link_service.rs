//! Short link creation, resolution, and owner-scoped management.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::application::services::token_service::Identity;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Bounded retry budget for code collisions. Documented here so the retry
/// loop can never spin indefinitely.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Which of the caller's links a bulk deletion targets.
#[derive(Debug, Clone)]
pub enum DeleteSelection {
    /// Every link owned by the caller.
    All,
    /// The listed codes, still restricted to the caller's own links.
    Codes(Vec<String>),
}

/// Service for creating and managing shortened links.
///
/// Collision handling is optimistic: codes are inserted directly and the
/// database unique constraint is the sole correctness mechanism, so
/// concurrent instances need no in-memory coordination.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin prepended to codes when building
    /// short URLs for responses.
    pub fn new(links: Arc<dyn LinkRepository>, base_url: String) -> Self {
        Self { links, base_url }
    }

    /// Creates a short link for the authenticated owner.
    ///
    /// Generates a fresh 7-character code and inserts optimistically; on a
    /// unique-constraint collision a new code is generated, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty or not an
    /// absolute http(s) URL.
    /// Returns [`AppError::Internal`] if the store is unreachable or the
    /// retry budget is exhausted.
    pub async fn shorten(&self, long_url: &str, owner: &Identity) -> Result<ShortLink, AppError> {
        validate_long_url(long_url)?;

        for _ in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewShortLink {
                code: generate_code(),
                long_url: long_url.to_string(),
                owner_username: owner.username.clone(),
                owner_email: owner.email.clone(),
            };

            match self.links.insert(new_link).await {
                Ok(link) => return Ok(link),
                // Unique-constraint collision: regenerate and try again.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its link, with no ownership filter.
    ///
    /// Malformed and absent codes are indistinguishable in the error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }

    /// Lists the caller's links, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_owned(&self, owner_email: &str) -> Result<Vec<ShortLink>, AppError> {
        self.links.list_by_owner(owner_email).await
    }

    /// Deletes the caller's links per the given selection.
    ///
    /// Deletion is always filtered by owner email in addition to the code
    /// set, so leaked or guessed codes never allow cross-user deletion.
    /// Returns the number of records actually deleted; zero matches is
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_owned(
        &self,
        selection: DeleteSelection,
        owner_email: &str,
    ) -> Result<u64, AppError> {
        match selection {
            DeleteSelection::All => self.links.delete_by_owner(owner_email).await,
            DeleteSelection::Codes(codes) if codes.is_empty() => Ok(0),
            DeleteSelection::Codes(codes) => self.links.delete_by_codes(&codes, owner_email).await,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

/// Validates that the submitted long URL is an absolute http(s) URL.
fn validate_long_url(long_url: &str) -> Result<(), AppError> {
    if long_url.is_empty() {
        return Err(AppError::bad_request("Invalid URL", json!({})));
    }

    let parsed = Url::parse(long_url)
        .map_err(|e| AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() })))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::bad_request(
            "Invalid URL",
            json!({ "reason": format!("unsupported scheme '{scheme}'") }),
        )),
    }
}
