//! # linkcut
//!
//! URL-shortening backend: accounts, 7-character short codes, a public
//! redirect endpoint, and owner-scoped link management over JWT bearer
//! auth. Axum on top of PostgreSQL.
//!
//! Layers, outermost in:
//!
//! - [`api`] - routes, handlers, DTOs, middleware
//! - [`application`] - services holding the business rules
//! - [`domain`] - entities and repository traits
//! - [`infrastructure`] - PostgreSQL repository implementations
//!
//! Startup wiring lives in [`config`], [`server`], and [`routes`].
//! Migrations run automatically on boot; `DATABASE_URL` and `JWT_SECRET`
//! are the only required settings.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// One-stop imports for integration tests and embedding.
pub mod prelude {
    pub use crate::application::services::{AccountService, Identity, LinkService, TokenService};
    pub use crate::domain::entities::{NewShortLink, NewUser, ShortLink, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
