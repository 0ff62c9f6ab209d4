//! DTOs for the to-do endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::TodoFields;

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Omitted fields take their defaults, so a `PUT` without `description`
/// clears it. An `id` sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl From<ItemPayload> for TodoFields {
    fn from(payload: ItemPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            completed: payload.completed,
        }
    }
}

/// Confirmation returned by `DELETE /items/{id}`.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: &'static str,
}
