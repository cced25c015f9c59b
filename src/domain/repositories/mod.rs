//! Data access contracts. Concrete implementations live in
//! `crate::infrastructure::persistence`; `mockall` generates mocks for the
//! service unit tests, and the integration suite supplies in-memory ones.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
