//! Business logic services for the application layer.

pub mod item_service;
pub mod url_service;

pub use item_service::ItemService;
pub use url_service::UrlService;
