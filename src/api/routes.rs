//! Route groups composed by the top-level router.

use axum::Router;
use axum::routing::{get, post, put};

use crate::api::handlers::{auth, health, links, profile, shorten};
use crate::state::AppState;

/// Routes reachable without a bearer token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler))
}

/// Routes gated by the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten::shorten_handler))
        .route(
            "/my-urls",
            get(links::list_links_handler).delete(links::delete_links_handler),
        )
        .route("/profile", put(profile::update_profile_handler))
        .route("/change-password", post(profile::change_password_handler))
        .route("/me", get(profile::me_handler))
}
