//! Repository for the `stickers` table.

use albums_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::sticker::{CreateSticker, Sticker};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, album_id, description, image_url, position, created_at";

/// Provides append and listing operations for stickers within an album.
pub struct StickerRepo;

impl StickerRepo {
    /// Append a sticker at the end of an album's collection.
    ///
    /// The new position is `max(position) + 1` (or `0` for an empty album).
    /// Callers appending to an existing album should hold the album row lock
    /// (see [`AlbumRepo::lock_by_id`](crate::repositories::AlbumRepo::lock_by_id))
    /// so concurrent appends cannot compute the same position.
    pub async fn append<'e, E>(
        executor: E,
        album_id: DbId,
        input: &CreateSticker,
    ) -> Result<Sticker, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO stickers (album_id, description, image_url, position)
             VALUES ($1, $2, $3,
                     (SELECT COALESCE(MAX(position) + 1, 0) FROM stickers WHERE album_id = $1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sticker>(&query)
            .bind(album_id)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(executor)
            .await
    }

    /// List an album's stickers in insertion order.
    pub async fn list_by_album<'e, E>(executor: E, album_id: DbId) -> Result<Vec<Sticker>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM stickers
             WHERE album_id = $1
             ORDER BY position ASC"
        );
        sqlx::query_as::<_, Sticker>(&query)
            .bind(album_id)
            .fetch_all(executor)
            .await
    }

    /// Count the stickers in an album.
    pub async fn count_by_album<'e, E>(executor: E, album_id: DbId) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stickers WHERE album_id = $1")
            .bind(album_id)
            .fetch_one(executor)
            .await
    }
}
