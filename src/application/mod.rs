//! Application services: the business rules sitting between the HTTP
//! handlers and the repositories.
//!
//! - [`services::LinkService`] - shorten, resolve, list, bulk delete
//! - [`services::AccountService`] - register, login, profile, password
//! - [`services::TokenService`] - session token issue/verify

pub mod services;
