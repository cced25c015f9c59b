//! Domain model: entities plus the repository contracts the rest of the
//! crate programs against. Nothing here knows about HTTP or SQL.

pub mod entities;
pub mod repositories;
