use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{account::AccountResolver, ticket_config::GuildConfigStore},
    state::AppState,
};

/// Name of the session cookie carrying the opaque session token.
pub const SESSION_COOKIE_NAME: &str = "ticket_panel.sid";

const DEFAULT_LOG_FILTER: &str = "ticket_panel=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set and falls back to info-level logs
/// for the application and HTTP tracing.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

/// Builds the HTTP client used for remote account lookups.
///
/// Redirects are disabled so a misconfigured account service URL cannot bounce
/// the request to an arbitrary host. Per-request timeouts are applied by the
/// account backend.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr(_))` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the session layer backed by an in-memory session store.
///
/// Sessions expire after the configured number of inactive days. Sessions do not
/// survive a restart, which only means operators have to log in again.
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.session_secure_cookie)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_inactivity_days,
        )))
}

/// Assembles the application state from configuration.
pub fn setup_state(config: &Config, http_client: reqwest::Client) -> AppState {
    let config_store = GuildConfigStore::new(config.ticket_config_path.clone());
    let account_resolver = AccountResolver::from_source(&config.account_source, http_client);

    tracing::info!(
        "Using configuration document {}",
        config.ticket_config_path.display()
    );

    AppState::new(config_store, account_resolver, config.views_dir.clone())
}

/// Resolves once Ctrl-C is received, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
