//! DailyQuote - A quote collection service with a rotating quote of the day
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - Quote REST endpoints                                     │
//! │  - Health and metrics                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Service Layer                            │
//! │  - QuoteService (validation, use cases)                     │
//! │  - DailyQuoteRotator (single-writer daily flag)             │
//! │  - Scheduler (daily timer)                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                              │
//! │  - QuoteStore contract                                      │
//! │  - SQLite (sqlx)                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers
//! - `service`: Quote use cases and daily rotation
//! - `scheduler`: Daily rotation timer
//! - `seed`: Sample data for empty databases
//! - `data`: Store contract and SQLite implementation
//! - `config`: Configuration management
//! - `error`: Error types

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod scheduler;
pub mod seed;
pub mod service;

use std::sync::Arc;

use data::QuoteStore;

/// Application state shared across all handlers
///
/// Cloned for each request; everything inside is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: Arc<data::Database>,

    /// Daily quote rotator (also driven by the scheduler)
    pub rotator: Arc<service::DailyQuoteRotator>,

    /// Quote use cases
    pub quotes: Arc<service::QuoteService>,
}

impl AppState {
    /// Initialize application state
    ///
    /// # Steps
    /// 1. Connect to SQLite database
    /// 2. Build rotator and quote service
    /// 3. Seed sample quotes into an empty database
    /// 4. Bootstrap the first daily quote if none is set
    ///
    /// # Errors
    /// Returns error if any initialization step fails
    pub async fn new(config: &config::AppConfig) -> Result<Self, error::AppError> {
        tracing::info!("Initializing application state...");

        // 1. Connect to SQLite database
        let db = Arc::new(data::Database::connect(&config.database.path).await?);
        tracing::info!("Database connected");

        // 2. Services
        let store: Arc<dyn QuoteStore> = db.clone();
        let rotator = Arc::new(service::DailyQuoteRotator::new(store.clone()));
        let quotes = Arc::new(service::QuoteService::new(store.clone(), rotator.clone()));

        // 3. Seed
        if config.seed.enabled {
            seed::seed_if_empty(store.as_ref()).await?;
        }

        // 4. Bootstrap daily quote
        if config.rotation.bootstrap_on_start {
            Self::ensure_daily_quote(store.as_ref(), &rotator).await?;
        }

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            db,
            rotator,
            quotes,
        })
    }

    /// Rotate once if no quote is flagged daily
    ///
    /// An empty store is not an error; the first scheduled rotation after
    /// quotes are added sets the daily quote.
    async fn ensure_daily_quote(
        store: &dyn QuoteStore,
        rotator: &service::DailyQuoteRotator,
    ) -> Result<(), error::AppError> {
        match store.get_daily().await {
            Ok(daily) => {
                tracing::info!(quote_id = daily.id, "Daily quote already set");
                Ok(())
            }
            Err(data::StoreError::NoDailyQuote) => match rotator.rotate().await {
                Ok(daily) => {
                    tracing::info!(quote_id = daily.id, "Bootstrapped daily quote");
                    Ok(())
                }
                Err(data::StoreError::EmptyStore) => {
                    tracing::warn!("No quotes available; daily quote left unset");
                    Ok(())
                }
                Err(error) => Err(error.into()),
            },
            Err(error) => Err(error.into()),
        }
    }
}

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::Router;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest("/api", api::quotes_router())
        .merge(api::metrics_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
