//! Route definitions for the `/albums` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{album, sticker};
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET    /                          -> list_mine
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// POST   /{album_id}/stickers       -> sticker::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(album::list_mine).post(album::create))
        .route("/{id}", get(album::get_by_id))
        .route("/{album_id}/stickers", post(sticker::create))
}
