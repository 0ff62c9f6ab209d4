//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::ShortenerState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "100680" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed.
/// Returns 500 Internal Server Error if the derived id is already stored,
/// including when the same URL is shortened twice.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let short_url = state.url_service.shorten(payload.url).await?;

    Ok(Json(ShortenResponse {
        short_id: short_url.short_id,
    }))
}
