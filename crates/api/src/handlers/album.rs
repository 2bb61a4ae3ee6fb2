//! Handlers for the `/albums` resource.

use albums_core::error::CoreError;
use albums_core::types::DbId;
use albums_db::models::album::{Album, AlbumWithStickers, CreateAlbum};
use albums_db::repositories::AlbumRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::auth::policy::API_PREFIX;
use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::handlers::ALBUM;
use crate::middleware::auth::AuthUser;
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/albums
///
/// Creates an album owned by the caller, together with its initial stickers,
/// in one transaction. Returns 201 with `Location: /api/v1/albums/{id}`.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAlbum>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let album = AlbumRepo::create(&mut *tx, &auth.username, &input).await?;
    tx.commit().await?;

    tracing::info!(
        album_id = album.id,
        owner = %album.owner,
        stickers = input.stickers.as_ref().map_or(0, Vec::len),
        "Album created"
    );

    Ok(created(format!("{API_PREFIX}/albums/{}", album.id)))
}

/// GET /api/v1/albums
///
/// Lists the caller's own albums, newest first.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Album>>>> {
    let albums = AlbumRepo::list_by_owner(&state.pool, &auth.username).await?;
    Ok(Json(DataResponse { data: albums }))
}

/// GET /api/v1/albums/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<AlbumWithStickers>>> {
    let mut conn = state.pool.acquire().await?;
    let album = AlbumRepo::find_by_id_with_stickers(&mut conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ALBUM, id }))?;
    Ok(Json(DataResponse { data: album }))
}
