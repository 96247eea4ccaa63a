//! JSON extractor - Maps body rejections into the structured error shape.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an `AppError`, so malformed or
/// undeserializable bodies get the same error envelope as every other
/// failure.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::JsonBody;
///
/// async fn register(JsonBody(draft): JsonBody<NewUser>) {
///     // draft deserialized, rejection already mapped to AppError
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
