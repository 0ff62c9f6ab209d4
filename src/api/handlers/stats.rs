//! Handler for short URL lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use crate::state::ShortenerState;

/// Returns the stored mapping for a short identifier.
///
/// # Endpoint
///
/// `GET /stats/{short_id}`
///
/// No visit counts are tracked; the response is `{short_id, full_url}`.
///
/// # Errors
///
/// Returns 404 Not Found with detail "URL not found" if the id is unknown.
pub async fn stats_handler(
    State(state): State<ShortenerState>,
    Path(short_id): Path<String>,
) -> Result<Json<ShortUrl>, AppError> {
    let short_url = state.url_service.resolve(&short_id).await?;
    Ok(Json(short_url))
}
