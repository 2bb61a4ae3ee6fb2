pub mod album;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /albums                                  list own (GET), create (POST)
/// /albums/{id}                             detail with stickers (GET)
/// /albums/{album_id}/stickers              add sticker (POST)
/// ```
///
/// Access requirements (scopes) are enforced by
/// [`enforce_access_policy`](crate::middleware::access::enforce_access_policy),
/// not by the individual routes.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/albums", album::router())
}
