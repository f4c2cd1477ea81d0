use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use product_catalog::{
    build_router, config::Config, repository::InMemoryProductRepository, seed, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_catalog=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Product catalog service (Rust + Axum)");

    let table = seed::build_table(config.seed_file.as_deref()).context("failed to seed product table")?;
    let repository = InMemoryProductRepository::new(table);
    let state = AppState::new(Arc::new(repository));

    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Try: GET http://{}/products?id=1", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
