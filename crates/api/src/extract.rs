//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use reelcraft_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs [`Validate`].
///
/// Unlike [`axum::Json`], every failure is an [`AppError`], so malformed
/// bodies, type mismatches, and rule violations all come back as 400 JSON
/// errors instead of axum's plain-text 415/422 rejections.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<GenerationRequest>) -> AppResult<...>
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
