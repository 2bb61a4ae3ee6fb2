//! Sticker entity model and DTOs.

use albums_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A sticker row from the `stickers` table.
///
/// `position` is the zero-based insertion order within the owning album.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub id: DbId,
    pub album_id: DbId,
    pub description: String,
    pub image_url: String,
    pub position: i32,
    pub created_at: Timestamp,
}

/// DTO for a new sticker, either inside an album payload or appended later.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSticker {
    #[serde(default)]
    #[validate(custom(function = "albums_core::validation::not_blank"))]
    pub description: String,
    #[serde(default)]
    #[validate(
        custom(function = "albums_core::validation::not_blank"),
        url(message = "must be a valid URL")
    )]
    pub image_url: String,
}

impl CreateSticker {
    pub fn new(description: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}
