//! HTML pages of the panel.
//!
//! The pages themselves are static files in the views directory; these handlers
//! only decide which one a session gets to see.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::path::Path;
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::AuthSession, state::AppState};

const LOGIN_PAGE: &str = "index.html";
const PANEL_PAGE: &str = "success.html";

/// GET / - Login page, or a redirect to the panel when already logged in.
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/success").into_response());
    }

    Ok(render(&state.views_dir, LOGIN_PAGE).await?.into_response())
}

/// GET /success - Configuration panel, or a redirect to the login page.
pub async fn success(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if !AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(render(&state.views_dir, PANEL_PAGE).await?.into_response())
}

async fn render(views_dir: &Path, page: &str) -> Result<Html<String>, AppError> {
    let path = views_dir.join(page);

    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        let message = format!("Failed to read page {}: {}", path.display(), e);
        AppError::InternalError(message)
    })?;

    Ok(Html(html))
}
