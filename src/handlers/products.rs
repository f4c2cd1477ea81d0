use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    query::{first_values, parse_product_query},
    AppState,
};

// ── List / search ─────────────────────────────────────────────────────────────

/// `GET /products[?id=N]`: parse the filter, search, wrap the hits in the
/// success envelope. A missing id is still a 200 with empty `data`.
///
/// Pairs decode lossily into strings, so the extractor never rejects; a
/// repeated `id` is resolved to its first occurrence.
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let params = first_values(pairs);

    let query = parse_product_query(&params).map_err(|err| {
        warn!(id = params.get("id").map(String::as_str), "Rejected product query");
        AppError::from(err)
    })?;

    let start = Instant::now();
    let products = state.products.search(&query)?;
    let elapsed = start.elapsed();

    info!(
        id = query.id,
        count = products.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Listed products"
    );

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "success",
            "data": products,
        })),
    ))
}
