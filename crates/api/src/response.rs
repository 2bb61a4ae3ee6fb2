//! Shared response types for API handlers.
//!
//! Read endpoints use a `{ "data": ... }` envelope; create endpoints answer
//! `201 Created` with a `Location` header and no body.

use axum::http::{header, StatusCode};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `201 Created` pointing at the new resource.
pub fn created(location: String) -> (StatusCode, [(header::HeaderName, String); 1]) {
    (StatusCode::CREATED, [(header::LOCATION, location)])
}
