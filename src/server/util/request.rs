//! Request body helpers.
//!
//! Handlers take their body as `Result<Json<T>, JsonRejection>` so the session
//! gate runs before the body is looked at. A body that fails to extract is then
//! reported as a `400 {error}` like every other validation failure.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Unwraps an already extracted JSON body.
///
/// # Returns
/// - `Ok(T)` - The deserialized body
/// - `Err(AppError::BadRequest(_))` - Missing content type, invalid JSON or wrong shape
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// Extracts a body sent either as JSON or as an urlencoded form.
///
/// The form is picked when the content type is
/// `application/x-www-form-urlencoded`; anything else is parsed as JSON.
pub async fn json_or_form_body<T>(request: Request) -> Result<T, AppError>
where
    T: DeserializeOwned + Send,
{
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(body) = Form::<T>::from_request(request, &())
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        return Ok(body);
    }

    json_body(Json::<T>::from_request(request, &()).await)
}
