//! Infrastructure layer with concrete adapter implementations.
//!
//! Contains the PostgreSQL implementations of the domain repository traits.

pub mod persistence;
