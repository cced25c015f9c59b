//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod links;
pub mod profile;
pub mod redirect;
pub mod shorten;

pub use redirect::redirect_handler;
