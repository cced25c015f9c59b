//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`          - Short link redirect (public)
//! - `GET  /health`          - Liveness check (public)
//! - `POST /register`        - Account registration (public)
//! - `POST /login`           - Credential exchange for a bearer token (public)
//! - Everything else         - Bearer token required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on owner-scoped routes

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Static paths (`/health`, `/register`, ...) take precedence over the
/// `/{code}` redirect capture, so short codes can never shadow an endpoint.
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
