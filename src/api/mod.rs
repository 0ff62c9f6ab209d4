//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Per-service route tables

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
