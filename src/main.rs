mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pagination-host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = routes::load_leptos_options()?;
    let app = routes::app(leptos_options);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "pagination-host listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
