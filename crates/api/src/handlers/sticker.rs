//! Handlers for the `/albums/{album_id}/stickers` sub-resource.

use albums_core::error::CoreError;
use albums_core::ownership::ensure_owner;
use albums_core::types::DbId;
use albums_db::models::album::Album;
use albums_db::models::sticker::CreateSticker;
use albums_db::repositories::{AlbumRepo, StickerRepo};
use axum::extract::State;
use axum::response::IntoResponse;
use sqlx::PgConnection;

use crate::auth::policy::API_PREFIX;
use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::ALBUM;
use crate::middleware::auth::AuthUser;
use crate::response::created;
use crate::state::AppState;

/// Lock an album for modification and verify the caller owns it.
///
/// Returns `NotFound` if the album does not exist and `Forbidden` if the
/// caller is not its owner. The existence check always comes first.
async fn find_and_authorize(
    conn: &mut PgConnection,
    album_id: DbId,
    auth: &AuthUser,
) -> AppResult<Album> {
    let album = AlbumRepo::lock_by_id(&mut *conn, album_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ALBUM,
            id: album_id,
        }))?;

    if let Err(err) = ensure_owner(&album.owner, &auth.username) {
        tracing::info!(
            album_id,
            owner = %album.owner,
            username = %auth.username,
            "Request denied: not the album owner"
        );
        return Err(err.into());
    }

    Ok(album)
}

/// POST /api/v1/albums/{album_id}/stickers
///
/// Appends a sticker to the caller's album. Lookup, ownership check and
/// insert share one transaction; the album row stays locked until commit so
/// concurrent appends to the same album are serialized. Returns 201 with
/// `Location: /api/v1/albums/{album_id}/stickers/{id}`.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(album_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<CreateSticker>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let album = find_and_authorize(&mut *tx, album_id, &auth).await?;
    let sticker = StickerRepo::append(&mut *tx, album.id, &input).await?;
    tx.commit().await?;

    tracing::info!(
        album_id = album.id,
        sticker_id = sticker.id,
        position = sticker.position,
        "Sticker added to album"
    );

    Ok(created(format!(
        "{API_PREFIX}/albums/{}/stickers/{}",
        album.id, sticker.id
    )))
}
