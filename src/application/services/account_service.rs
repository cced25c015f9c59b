//! Registration, login, and profile management.
//!
//! Passwords are hashed with Argon2id using a random salt; the PHC string
//! format is stored so algorithm parameters travel with the hash. Login
//! failures never reveal whether the email exists.

use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use serde_json::json;

use crate::application::services::token_service::TokenService;
use crate::domain::entities::user::ALLOWED_SEX_VALUES;
use crate::domain::entities::{NewUser, ProfileUpdate, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for account lifecycle operations.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        self.users
            .insert(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => {
                    AppError::conflict("Username or email already exists", json!({}))
                }
                other => other,
            })
    }

    /// Exchanges credentials for a session token.
    ///
    /// Unknown email and wrong password produce the same error, so login
    /// never confirms whether an address is registered.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on bad credentials.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let invalid = || AppError::bad_request("Invalid credentials", json!({}));

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        let token = self.tokens.issue(&user.username, &user.email)?;

        Ok((token, user))
    }

    /// Returns the account for an authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account no longer exists.
    pub async fn current_user(&self, email: &str) -> Result<User, AppError> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({})))
    }

    /// Replaces the editable profile fields of the caller's account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the sex value is not one of
    /// `male`, `female`, `other`, or empty.
    /// Returns [`AppError::Conflict`] if the new username is taken.
    /// Returns [`AppError::NotFound`] if the account no longer exists.
    pub async fn update_profile(
        &self,
        email: &str,
        update: ProfileUpdate,
    ) -> Result<User, AppError> {
        if let Some(sex) = update.sex.as_deref()
            && !ALLOWED_SEX_VALUES.contains(&sex)
        {
            return Err(AppError::bad_request(
                "Invalid sex value",
                json!({ "allowed": ALLOWED_SEX_VALUES, "provided": sex }),
            ));
        }

        self.users
            .update_profile(email, update)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => {
                    AppError::conflict("Username already exists", json!({}))
                }
                other => other,
            })
    }

    /// Changes the caller's password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the current password is wrong.
    /// Returns [`AppError::NotFound`] if the account no longer exists.
    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({})))?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(AppError::bad_request(
                "Current password is incorrect",
                json!({}),
            ));
        }

        let password_hash = hash_password(new_password)?;
        self.users
            .update_password_hash(email, &password_hash)
            .await
    }
}

/// Hashes a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            AppError::internal(
                "Failed to hash password",
                json!({ "source": e.to_string() }),
            )
        })?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch; only malformed hashes are errors.
fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        AppError::internal(
            "Stored password hash is malformed",
            json!({ "source": e.to_string() }),
        )
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::internal(
            "Password verification failed",
            json!({ "source": e.to_string() }),
        )),
    }
}
