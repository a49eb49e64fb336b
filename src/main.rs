mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let session = startup::setup_session_layer(&config);
    let state = startup::setup_state(&config, http_client);

    let app = router::app(state, session, &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Ticket panel listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
