//! Plain data structures for the two aggregates: [`ShortLink`] and
//! [`User`]. Creation inputs get their own structs (`NewShortLink`,
//! `NewUser`) so inserts never carry database-assigned fields.

pub mod short_link;
pub mod user;

pub use short_link::{NewShortLink, ShortLink};
pub use user::{NewUser, ProfileUpdate, User};
