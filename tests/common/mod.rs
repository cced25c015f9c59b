//! Shared test fixtures: in-memory repositories and a pre-wired app state.
//!
//! The in-memory repositories emulate the unique constraints of the real
//! schema, so service-level conflict handling is exercised without a
//! database.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use linkcut::domain::entities::{NewShortLink, NewUser, ProfileUpdate, ShortLink, User};
use linkcut::domain::repositories::{LinkRepository, UserRepository};
use linkcut::prelude::*;
use linkcut::routes::app_router;

pub const TEST_BASE_URL: &str = "http://sho.rt";

#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<ShortLink>>,
    next_id: AtomicI64,
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.write().await;

        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let link = ShortLink {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            code: new_link.code,
            long_url: new_link.long_url,
            owner_username: new_link.owner_username,
            owner_email: new_link.owner_email,
            created_at: Utc::now(),
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let links = self.links.read().await;
        Ok(links.iter().find(|l| l.code == code).cloned())
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.read().await;

        let mut owned: Vec<ShortLink> = links
            .iter()
            .filter(|l| l.owner_email == owner_email)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(owned)
    }

    async fn delete_by_owner(&self, owner_email: &str) -> Result<u64, AppError> {
        let mut links = self.links.write().await;

        let before = links.len();
        links.retain(|l| l.owner_email != owner_email);

        Ok((before - links.len()) as u64)
    }

    async fn delete_by_codes(
        &self,
        codes: &[String],
        owner_email: &str,
    ) -> Result<u64, AppError> {
        let mut links = self.links.write().await;

        let before = links.len();
        links.retain(|l| !(l.owner_email == owner_email && codes.contains(&l.code)));

        Ok((before - links.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.username == new_user.username || u.email == new_user.email)
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            age: None,
            mobile: None,
            sex: None,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_profile(&self, email: &str, update: ProfileUpdate) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.email != email && u.username == update.username)
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or_else(|| AppError::not_found("User not found", json!({})))?;

        user.username = update.username;
        user.age = update.age;
        user.mobile = update.mobile;
        user.sex = update.sex;

        Ok(user.clone())
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or_else(|| AppError::not_found("User not found", json!({})))?;
        user.password_hash = password_hash.to_string();

        Ok(())
    }
}

/// Builds an [`AppState`] wired to fresh in-memory repositories.
pub fn create_test_state() -> AppState {
    let link_repository = Arc::new(InMemoryLinkRepository::default());
    let user_repository = Arc::new(InMemoryUserRepository::default());

    let token_service = Arc::new(TokenService::new("test-secret".to_string(), 86_400));
    let link_service = Arc::new(LinkService::new(link_repository, TEST_BASE_URL.to_string()));
    let account_service = Arc::new(AccountService::new(user_repository, token_service.clone()));

    AppState::new(link_service, account_service, token_service)
}

/// Builds a test server over the full application router.
pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).expect("test server should start")
}

/// Registers an account and returns a valid bearer token for it.
pub async fn register_and_login(server: &TestServer, username: &str, email: &str) -> String {
    let response = server
        .post("/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": "hunter22",
        }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/login")
        .json(&json!({
            "email": email,
            "password": "hunter22",
        }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("login response should carry a token")
        .to_string()
}
