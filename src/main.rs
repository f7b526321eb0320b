//! Campus Coffee POS catalog service binary

use anyhow::Result;
use campus_coffee::prelude::*;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServiceConfig::from_yaml_file(&path)?,
        None => ServiceConfig::default_config(),
    };

    let repository = Arc::new(InMemoryPosRepository::new());
    let service = Arc::new(PosService::new(repository));

    let mut app = build_pos_routes(AppState { service });
    if config.permissive_cors {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("POS catalog service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
