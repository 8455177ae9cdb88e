//! Prometheus metrics endpoint

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus::{Encoder, TextEncoder};

use crate::AppState;
use crate::data::QuoteStore;
use crate::metrics::{QUOTES_TOTAL, REGISTRY};

/// GET /metrics
///
/// Refreshes the stored-quote gauge, then renders every registered metric
/// in Prometheus text format.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.db.count().await {
        Ok(count) => QUOTES_TOTAL.set(count),
        Err(error) => tracing::warn!(%error, "Failed to refresh quote count gauge"),
    }

    let encoder = TextEncoder::new();
    match encoder.encode_to_string(&REGISTRY.gather()) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, encoder.format_type().to_string())],
            body,
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode metrics").into_response()
        }
    }
}

pub fn metrics_router() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}
