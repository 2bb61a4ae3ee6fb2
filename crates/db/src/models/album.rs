//! Album entity model and DTOs.

use albums_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::sticker::{CreateSticker, Sticker};

/// An album row from the `albums` table.
///
/// `owner` is written once at creation and never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub owner: String,
    pub created_at: Timestamp,
}

/// An album together with its stickers in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumWithStickers {
    #[serde(flatten)]
    pub album: Album,
    pub stickers: Vec<Sticker>,
}

/// DTO for creating a new album with its initial stickers.
///
/// Missing string fields deserialize as empty so they are reported as
/// validation violations rather than parse failures.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlbum {
    #[serde(default)]
    #[validate(custom(function = "albums_core::validation::not_blank"))]
    pub code: String,
    #[serde(default)]
    #[validate(custom(function = "albums_core::validation::not_blank"))]
    pub name: String,
    /// May be empty, but must be present.
    #[serde(default)]
    #[validate(required(message = "must not be null"), nested)]
    pub stickers: Option<Vec<CreateSticker>>,
}
