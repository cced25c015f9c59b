//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AccountService, LinkService, TokenService};

/// Application-wide state.
///
/// Services hold repository trait objects, so tests can substitute in-memory
/// persistence without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub account_service: Arc<AccountService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        account_service: Arc<AccountService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            link_service,
            account_service,
            token_service,
        }
    }
}
