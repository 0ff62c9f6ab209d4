//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for service tests.
//!
//! - [`UrlRepository`] - Short URL mappings
//! - [`ItemRepository`] - To-do items

pub mod item_repository;
pub mod url_repository;

pub use item_repository::ItemRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
