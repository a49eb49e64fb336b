use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, SessionInfoDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::account::SessionIdentity,
        state::AppState,
        util::request::json_or_form_body,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with a panel account.
///
/// Looks the credentials up in the configured account backend and, on a match,
/// binds the account's guild identity to a fresh session. A failed login leaves
/// the session untouched. Credentials are accepted as JSON or as an urlencoded
/// form post.
///
/// # Returns
/// - `200 OK` - Logged in, body carries the bound guild id
/// - `400 Bad Request` - Body is neither valid JSON nor a valid form
/// - `401 Unauthorized` - No account matches (or the account backend is unavailable)
/// - `500 Internal Server Error` - Session store failure
#[utoipa::path(
    post,
    path = "/local-login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Unreadable body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn local_login(
    State(state): State<AppState>,
    session: Session,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let payload: LoginDto = json_or_form_body(request).await?;

    let Some(account) = state
        .account_resolver
        .resolve(&payload.username, &payload.password)
        .await
    else {
        tracing::info!(username = %payload.username, "Rejected panel login");
        return Err(AuthError::InvalidCredentials(payload.username).into());
    };

    let identity = SessionIdentity::from(&account);
    AuthSession::new(&session).set_identity(&identity).await?;

    tracing::info!(
        username = %identity.username,
        guild_id = %identity.guild_id,
        "Panel login succeeded"
    );

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            success: true,
            guild_id: identity.guild_id,
        }),
    ))
}

/// GET /logout - Destroy the session and return to the login page.
///
/// Idempotent: logging out without a session still redirects.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok(Redirect::to("/"))
}

/// Get the identity bound to the current session.
///
/// # Returns
/// - `200 OK` - Guild id, username and server name of the logged-in account
/// - `401 Unauthorized` - Session is not bound to a guild
#[utoipa::path(
    get,
    path = "/api/session-info",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session identity", body = SessionInfoDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn session_info(session: Session) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;

    Ok((StatusCode::OK, Json(identity.into_dto())))
}
