//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The `code` column carries a unique constraint; insertion is optimistic
/// and the constraint is the sole collision-detection mechanism, so multiple
/// service instances can generate codes concurrently without coordination.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - In-memory implementations in the integration test suite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code, with no ownership filter.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists all links owned by the given email, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<ShortLink>, AppError>;

    /// Deletes every link owned by the given email.
    ///
    /// Returns the number of records removed; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_owner(&self, owner_email: &str) -> Result<u64, AppError>;

    /// Deletes the given codes, restricted to links owned by the given email.
    ///
    /// Codes owned by other users are silently skipped, so the returned
    /// count reflects only the caller's own records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_codes(&self, codes: &[String], owner_email: &str)
    -> Result<u64, AppError>;
}
