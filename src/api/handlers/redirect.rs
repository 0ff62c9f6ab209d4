//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short identifier to its full URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Responds with 307 Temporary Redirect and a `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found with detail "URL not found" if the id is unknown.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<Redirect, AppError> {
    let short_url = state.url_service.resolve(&short_id).await?;

    Ok(Redirect::temporary(&short_url.full_url))
}
