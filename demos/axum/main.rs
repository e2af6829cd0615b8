mod routes;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use bobapp_cors::{load_mappings, middleware};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "demos/axum/cors.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = env::var("CORS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    // Refuse to bind with an invalid or ambiguous CORS policy.
    let mappings = Arc::new(load_mappings(&config_path)?);

    let app = middleware::apply(
        Router::new()
            .route("/api/joke", get(routes::joke))
            .route("/api/health", get(routes::health)),
        mappings,
    );

    let addr: SocketAddr = "127.0.0.1:8080".parse()?;
    info!(%addr, config = %config_path, "bobapp CORS demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
