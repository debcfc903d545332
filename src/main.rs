//! Storefront host: server-renders the Leptos client and serves its assets.
//!
//! All catalog and cart data lives in the browser; this process only ships
//! HTML, WASM and static files.

mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "storefront host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(ServerError::Bind)?;

    tracing::info!(%addr, "storefront listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
