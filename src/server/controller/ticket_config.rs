use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        ticket_config::{
            Button, ButtonUpdateDto, EmbedUpdateDto, GifUpdateDto, GuildConfig, NoticeUpdateDto,
            TicketConfigResponseDto, TitleUpdateDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            account::SessionIdentity,
            ticket_config::{is_empty_value, Surface},
        },
        state::AppState,
        util::request::json_body,
    },
};

/// Tag for grouping ticket configuration endpoints in OpenAPI documentation
pub static TICKET_CONFIG_TAG: &str = "ticket-config";

/// Get the ticket configuration of the caller's guild.
///
/// A guild that was never configured gets an empty configuration.
///
/// # Access Control
/// - Session must be bound to a guild
///
/// # Returns
/// - `200 OK` - The guild's configuration
/// - `401 Unauthorized` - Session is not bound to a guild
/// - `500 Internal Server Error` - Configuration document unreadable or malformed
#[utoipa::path(
    get,
    path = "/api/ticket-config",
    tag = TICKET_CONFIG_TAG,
    responses(
        (status = 200, description = "Guild ticket configuration", body = TicketConfigResponseDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_config(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;

    let config = state.config_store.get_config(&identity.guild_id).await?;

    Ok(config_response(config))
}

/// Create or replace a ticket button.
///
/// A button whose `id` already exists is replaced at its current position;
/// otherwise the button is appended.
///
/// # Access Control
/// - Session must be bound to a guild
///
/// # Returns
/// - `200 OK` - Updated guild configuration
/// - `400 Bad Request` - Body unreadable, or `button` missing, not an object, or without a string `id`
/// - `401 Unauthorized` - Session is not bound to a guild
/// - `500 Internal Server Error` - Configuration document could not be loaded or written
#[utoipa::path(
    post,
    path = "/api/ticket-config/button",
    tag = TICKET_CONFIG_TAG,
    request_body = ButtonUpdateDto,
    responses(
        (status = 200, description = "Button saved", body = TicketConfigResponseDto),
        (status = 400, description = "Invalid button data", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_button(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<ButtonUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;
    let payload = json_body(payload)?;

    let Some(value) = payload.button.filter(|v| !v.is_null()) else {
        return Err(AppError::BadRequest("button is required".to_string()));
    };
    let button = Button::from_value(value).map_err(AppError::BadRequest)?;

    let config = state
        .config_store
        .upsert_button(&identity.guild_id, button)
        .await?;

    Ok(config_response(config))
}

/// Delete a ticket button by id.
///
/// Deleting an id that does not exist succeeds and returns the unchanged configuration.
///
/// # Access Control
/// - Session must be bound to a guild
#[utoipa::path(
    delete,
    path = "/api/ticket-config/button/{button_id}",
    tag = TICKET_CONFIG_TAG,
    params(
        ("button_id" = String, Path, description = "Id of the button to remove")
    ),
    responses(
        (status = 200, description = "Button removed", body = TicketConfigResponseDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_button(
    State(state): State<AppState>,
    session: Session,
    Path(button_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;

    let config = state
        .config_store
        .delete_button(&identity.guild_id, &button_id)
        .await?;

    Ok(config_response(config))
}

/// Replace the ticket embed.
#[utoipa::path(
    post,
    path = "/api/ticket-config/embed",
    tag = TICKET_CONFIG_TAG,
    request_body = EmbedUpdateDto,
    responses(
        (status = 200, description = "Embed replaced", body = TicketConfigResponseDto),
        (status = 400, description = "embed missing or empty", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_embed(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<EmbedUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;
    let payload = json_body(payload)?;

    replace_surface(&state, &identity, Surface::Embed, payload.embed).await
}

/// Replace the ticket notice.
#[utoipa::path(
    post,
    path = "/api/ticket-config/notice",
    tag = TICKET_CONFIG_TAG,
    request_body = NoticeUpdateDto,
    responses(
        (status = 200, description = "Notice replaced", body = TicketConfigResponseDto),
        (status = 400, description = "notice missing or empty", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_notice(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<NoticeUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;
    let payload = json_body(payload)?;

    replace_surface(&state, &identity, Surface::Notice, payload.notice).await
}

/// Replace the ticket panel title.
#[utoipa::path(
    post,
    path = "/api/ticket-config/title",
    tag = TICKET_CONFIG_TAG,
    request_body = TitleUpdateDto,
    responses(
        (status = 200, description = "Title replaced", body = TicketConfigResponseDto),
        (status = 400, description = "title missing or empty", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_title(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<TitleUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;
    let payload = json_body(payload)?;

    replace_surface(&state, &identity, Surface::Title, payload.title).await
}

/// Replace the ticket panel GIF.
#[utoipa::path(
    post,
    path = "/api/ticket-config/gif",
    tag = TICKET_CONFIG_TAG,
    request_body = GifUpdateDto,
    responses(
        (status = 200, description = "GIF replaced", body = TicketConfigResponseDto),
        (status = 400, description = "gif missing or empty", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_gif(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<GifUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require().await?;
    let payload = json_body(payload)?;

    replace_surface(&state, &identity, Surface::Gif, payload.gif).await
}

/// Shared body of the surface endpoints once the session is gated: non-empty
/// check, then full replace.
async fn replace_surface(
    state: &AppState,
    identity: &SessionIdentity,
    surface: Surface,
    value: Option<Value>,
) -> Result<(StatusCode, Json<TicketConfigResponseDto>), AppError> {
    let Some(value) = value.filter(|v| !is_empty_value(v)) else {
        return Err(AppError::BadRequest(format!("{} is required", surface)));
    };

    let config = state
        .config_store
        .set_surface(&identity.guild_id, surface, value)
        .await?;

    Ok(config_response(config))
}

fn config_response(config: GuildConfig) -> (StatusCode, Json<TicketConfigResponseDto>) {
    (
        StatusCode::OK,
        Json(TicketConfigResponseDto {
            success: true,
            config,
        }),
    )
}
