mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Load `.env` before the subscriber reads `RUST_LOG`; report after.
    let dotenv = config::dotenv_failure(dotenvy::dotenv());
    tracing_subscriber::fmt::init();
    if let Some(e) = dotenv {
        tracing::warn!(error = %e, "failed to load .env");
    }

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "pay-buddy stopped");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, "pay-buddy listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
