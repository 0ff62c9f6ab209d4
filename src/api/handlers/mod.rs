//! HTTP request handlers for both services.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod items;
pub mod list_urls;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::{shortener_health_handler, todo_health_handler};
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use list_urls::list_urls_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
