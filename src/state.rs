//! Shared handler state for each service.
//!
//! The store handle is injected at construction time, so tests can hand in an
//! in-memory pool without touching handler logic.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{ItemService, UrlService};
use crate::infrastructure::persistence::{SqliteItemRepository, SqliteUrlRepository};

/// State of the URL shortener service.
#[derive(Clone)]
pub struct ShortenerState {
    pub url_service: Arc<UrlService<SqliteUrlRepository>>,
}

impl ShortenerState {
    pub fn new(pool: SqlitePool) -> Self {
        let repository = Arc::new(SqliteUrlRepository::new(pool));
        Self {
            url_service: Arc::new(UrlService::new(repository)),
        }
    }
}

/// State of the to-do service.
#[derive(Clone)]
pub struct TodoState {
    pub item_service: Arc<ItemService<SqliteItemRepository>>,
}

impl TodoState {
    pub fn new(pool: SqlitePool) -> Self {
        let repository = Arc::new(SqliteItemRepository::new(pool));
        Self {
            item_service: Arc::new(ItemService::new(repository)),
        }
    }
}
