use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;

use crate::repository::ProductRepository;

/// Shared application state. The repository is read-only, so a clone per
/// request is just an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/product", get(handlers::products::list_products))
        .route("/product/", get(handlers::products::list_products))
        .route("/products", get(handlers::products::list_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a handler panic into the same 500 envelope a repository failure gets.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Handler panicked");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (status, error::error_body(status, "internal error")).into_response()
}
