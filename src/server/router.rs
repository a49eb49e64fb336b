use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        auth::{local_login, logout, session_info},
        page::{index, success},
        ticket_config::{
            delete_button, get_ticket_config, set_embed, set_gif, set_notice, set_title,
            upsert_button,
        },
    },
    state::AppState,
};

/// OpenAPI description of the JSON API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::auth::local_login,
        crate::server::controller::auth::session_info,
        crate::server::controller::ticket_config::get_ticket_config,
        crate::server::controller::ticket_config::upsert_button,
        crate::server::controller::ticket_config::delete_button,
        crate::server::controller::ticket_config::set_embed,
        crate::server::controller::ticket_config::set_notice,
        crate::server::controller::ticket_config::set_title,
        crate::server::controller::ticket_config::set_gif,
    ),
    tags(
        (name = "auth", description = "Panel login and session identity"),
        (name = "ticket-config", description = "Per-guild ticket bot configuration")
    )
)]
pub struct ApiDoc;

pub fn router(public_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/success", get(success))
        .route("/local-login", post(local_login))
        .route("/logout", get(logout))
        .route("/api/session-info", get(session_info))
        .route("/api/ticket-config", get(get_ticket_config))
        .route("/api/ticket-config/button", post(upsert_button))
        .route("/api/ticket-config/button/{button_id}", delete(delete_button))
        .route("/api/ticket-config/embed", post(set_embed))
        .route("/api/ticket-config/notice", post(set_notice))
        .route("/api/ticket-config/title", post(set_title))
        .route("/api/ticket-config/gif", post(set_gif))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .fallback_service(ServeDir::new(public_dir))
}

/// Full application: routes, state, session handling and request tracing.
pub fn app(
    state: AppState,
    session_layer: SessionManagerLayer<MemoryStore>,
    public_dir: &Path,
) -> Router {
    router(public_dir)
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}
