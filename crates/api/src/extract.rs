//! Extractors that report rejections through [`AppError`].

use albums_core::error::CoreError;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`Json`], but runs [`Validate`] on the payload and reports every
/// violation as a 400 `VALIDATION_ERROR`. Malformed bodies become 400
/// `BAD_REQUEST` instead of axum's default 415/422 rejections.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateAlbum>) -> AppResult<StatusCode> {
///     // input is guaranteed valid here
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

/// Like [`Path`], but a malformed segment (e.g. a non-numeric id) becomes a
/// 400 `BAD_REQUEST` in the standard JSON error body.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
