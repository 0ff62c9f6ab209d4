//! Core domain entities.
//!
//! - [`ShortUrl`] - A short identifier mapped to a full URL
//! - [`TodoItem`] - A to-do list entry
//!
//! Creation data lives in separate structs where the store assigns part of
//! the record ([`TodoFields`]).

pub mod short_url;
pub mod todo_item;

pub use short_url::ShortUrl;
pub use todo_item::{TodoFields, TodoItem};
