//! Request extractors that turn malformed input into 422 responses before
//! any handler or repository code runs.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use taskman_core::types::DbId;
use taskman_core::validation;
use validator::Validate;

use crate::error::AppError;

/// A `{id}` path segment that must parse as a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveId(pub DbId);

impl<S> FromRequestParts<S> for PositiveId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Unprocessable(rejection.body_text()))?;

        // `i64::from_str` takes a leading '+'; ids are canonical digits only.
        let parsed = if raw.starts_with('+') {
            None
        } else {
            raw.parse::<DbId>().ok()
        };
        let id = parsed
            .ok_or_else(|| AppError::Unprocessable(format!("id must be an integer, got '{raw}'")))?;
        if id < 1 {
            return Err(AppError::Unprocessable(format!(
                "id must be a positive integer, got {id}"
            )));
        }
        Ok(Self(id))
    }
}

/// JSON body extractor whose rejections are reported as [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// JSON body extractor that also runs the `validator` rules of `T`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        validation::validate(&value)
            .map_err(|err| AppError::Unprocessable(err.to_string()))?;
        Ok(Self(value))
    }
}
