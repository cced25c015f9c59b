//! Repository trait for account data access.

use crate::domain::entities::{NewUser, ProfileUpdate, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing accounts.
///
/// `username` and `email` each carry unique constraints; lookups use email
/// as the stable account key.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - In-memory implementations in the integration test suite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds an account by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Replaces the editable profile fields of the account with the given email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account matches the email.
    /// Returns [`AppError::Conflict`] if the new username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_profile(&self, email: &str, update: ProfileUpdate) -> Result<User, AppError>;

    /// Replaces the stored password hash of the account with the given email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account matches the email.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_password_hash(&self, email: &str, password_hash: &str)
    -> Result<(), AppError>;
}
