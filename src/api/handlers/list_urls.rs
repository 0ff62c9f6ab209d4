//! Handler for listing all short URLs.

use axum::{Json, extract::State};

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use crate::state::ShortenerState;

/// Lists every stored mapping as `[{short_id, full_url}, ...]`.
///
/// # Endpoint
///
/// `GET /list_urls`
///
/// Order is whatever the store returns; no ordering is guaranteed.
pub async fn list_urls_handler(
    State(state): State<ShortenerState>,
) -> Result<Json<Vec<ShortUrl>>, AppError> {
    let urls = state.url_service.list().await?;
    Ok(Json(urls))
}
