//! Data Transfer Objects for API requests and responses.
//!
//! Stored records ([`crate::domain::entities::ShortUrl`],
//! [`crate::domain::entities::TodoItem`]) serialize directly; the types here
//! cover request bodies and the remaining response shapes.

pub mod health;
pub mod item;
pub mod shorten;
