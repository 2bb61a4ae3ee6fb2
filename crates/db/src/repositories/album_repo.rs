//! Repository for the `albums` table.

use albums_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::album::{Album, AlbumWithStickers, CreateAlbum};
use crate::repositories::StickerRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, owner, created_at";

/// Provides persistence operations for albums.
///
/// Album lookups never load stickers implicitly: use
/// [`find_by_id_with_stickers`](Self::find_by_id_with_stickers) when the
/// collection is needed.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert a new album owned by `owner` together with its initial stickers,
    /// which keep the order they have in `input.stickers`.
    ///
    /// Issues several statements; pass `&mut *tx` so the album and its
    /// stickers are committed atomically.
    pub async fn create(
        conn: &mut PgConnection,
        owner: &str,
        input: &CreateAlbum,
    ) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (code, name, owner)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let album = sqlx::query_as::<_, Album>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(owner)
            .fetch_one(&mut *conn)
            .await?;

        for sticker in input.stickers.iter().flatten() {
            StickerRepo::append(&mut *conn, album.id, sticker).await?;
        }

        Ok(album)
    }

    /// Find an album by its internal ID. Does not load stickers.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Album>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an album by ID and lock its row until the enclosing transaction
    /// ends. Serializes concurrent modifications of the same album.
    pub async fn lock_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Album>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an album and its stickers (in insertion order).
    pub async fn find_by_id_with_stickers(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<AlbumWithStickers>, sqlx::Error> {
        let Some(album) = Self::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };
        let stickers = StickerRepo::list_by_album(&mut *conn, id).await?;
        Ok(Some(AlbumWithStickers { album, stickers }))
    }

    /// List albums owned by `owner`, newest first.
    pub async fn list_by_owner<'e, E>(executor: E, owner: &str) -> Result<Vec<Album>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM albums
             WHERE owner = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(owner)
            .fetch_all(executor)
            .await
    }

    /// Total number of albums.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM albums")
            .fetch_one(executor)
            .await
    }

    /// Delete every album (stickers cascade). Returns the number of albums removed.
    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM albums").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
