//! # url-todo
//!
//! Two small REST services over SQLite, built with Axum:
//!
//! - **Shortener** - derives a deterministic 6-character id from a URL,
//!   stores the mapping and redirects by id
//! - **Todo** - CRUD over to-do items with store-assigned ids
//!
//! Each service owns one table in its own database and runs as its own
//! process (`url-todo shortener`, `url-todo todo`).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and schema
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/shorturl.db"
//! cargo run -- shortener
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::{ShortenerState, TodoState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ItemService, UrlService};
    pub use crate::config::{Config, ServiceKind};
    pub use crate::domain::entities::{ShortUrl, TodoFields, TodoItem};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::init_schema;
    pub use crate::routes::{shortener_app, shortener_router, todo_app, todo_router};
    pub use crate::state::{ShortenerState, TodoState};
}
