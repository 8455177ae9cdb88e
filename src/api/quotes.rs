//! Quote endpoints
//!
//! Thin adapter: each handler is one `QuoteService` call plus conversion
//! to `QuoteResponse`. Bodies and path parameters go through `ApiJson` and
//! `ApiPath` so extraction failures share the `{"error": ...}` shape.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};

use super::converters::{quote_to_response, quotes_to_response};
use super::dto::QuoteResponse;
use super::extract::{ApiJson, ApiPath};
use crate::AppState;
use crate::data::QuoteRequest;
use crate::error::AppError;

/// Create quotes router
///
/// Routes (relative to the `/api` nest):
/// - GET/POST /v1/quotes
/// - GET/PUT/DELETE /v1/quotes/:id
/// - GET /v1/quotes/daily
/// - POST /v1/quotes/daily/rotate
/// - GET /v1/quotes/random
/// - GET /v1/quotes/author/:author
/// - GET /v1/quotes/authors
pub fn quotes_router() -> Router<AppState> {
    Router::new()
        .route("/v1/quotes", get(list_quotes).post(create_quote))
        .route("/v1/quotes/daily", get(get_daily_quote))
        .route("/v1/quotes/daily/rotate", post(rotate_daily_quote))
        .route("/v1/quotes/random", get(get_random_quote))
        .route("/v1/quotes/authors", get(list_authors))
        .route("/v1/quotes/author/:author", get(list_quotes_by_author))
        .route(
            "/v1/quotes/:id",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
}

/// GET /api/v1/quotes
async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let quotes = state.quotes.list_all().await?;
    Ok(Json(quotes_to_response(quotes)))
}

/// GET /api/v1/quotes/:id
async fn get_quote(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quotes.get_by_id(id).await?;
    Ok(Json(quote_to_response(quote)))
}

/// POST /api/v1/quotes
/// Returns 201 with the stored quote
async fn create_quote(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<QuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let quote = state.quotes.create(&req).await?;
    Ok((StatusCode::CREATED, Json(quote_to_response(quote))))
}

/// PUT /api/v1/quotes/:id
async fn update_quote(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quotes.update(id, &req).await?;
    Ok(Json(quote_to_response(quote)))
}

/// DELETE /api/v1/quotes/:id
async fn delete_quote(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.quotes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/quotes/daily
async fn get_daily_quote(State(state): State<AppState>) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quotes.get_daily().await?;
    Ok(Json(quote_to_response(quote)))
}

/// POST /api/v1/quotes/daily/rotate
/// Picks a new daily quote immediately
async fn rotate_daily_quote(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quotes.rotate_daily().await?;
    Ok(Json(quote_to_response(quote)))
}

/// GET /api/v1/quotes/random
async fn get_random_quote(State(state): State<AppState>) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quotes.get_random().await?;
    Ok(Json(quote_to_response(quote)))
}

/// GET /api/v1/quotes/author/:author
async fn list_quotes_by_author(
    State(state): State<AppState>,
    ApiPath(author): ApiPath<String>,
) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let quotes = state.quotes.list_by_author(&author).await?;
    Ok(Json(quotes_to_response(quotes)))
}

/// GET /api/v1/quotes/authors
async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let authors = state.quotes.list_authors().await?;
    Ok(Json(authors))
}
