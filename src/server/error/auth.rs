use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The session carries no guild identity.
    ///
    /// Raised before any configuration document I/O. Results in a 401 Unauthorized
    /// response.
    #[error("Session is not bound to a guild")]
    NotLoggedIn,

    /// No account matched the submitted username and password.
    ///
    /// Also covers an unavailable account backend, which is reported as an empty
    /// account table. Results in a 401 Unauthorized response.
    #[error("No account matches username '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with a user-facing message. The
/// failure is logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::NotLoggedIn => "Login required.",
            Self::InvalidCredentials(_) => "Invalid username or password.",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
