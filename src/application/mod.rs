//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::url_service::UrlService`] - URL shortening and lookup
//! - [`services::item_service::ItemService`] - To-do item CRUD

pub mod services;
