//! SQLite persistence.
//!
//! Concrete implementations of the domain repository traits using SQLx, plus
//! pool construction and schema initialization.
//!
//! - [`SqliteUrlRepository`] - Short URL storage and lookup
//! - [`SqliteItemRepository`] - To-do item storage
//! - [`database`] - Pool setup and idempotent schema step

pub mod database;
pub mod sqlite_item_repository;
pub mod sqlite_url_repository;

pub use database::{connect, init_schema};
pub use sqlite_item_repository::SqliteItemRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
