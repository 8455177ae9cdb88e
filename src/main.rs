//! DailyQuote binary entry point

use dailyquote::{AppState, config, scheduler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application entry point
///
/// # Setup
/// 1. Load configuration from file and environment
/// 2. Initialize tracing/logging
/// 3. Initialize metrics
/// 4. Initialize AppState (database, seeding, bootstrap rotation)
/// 5. Start the daily rotation task
/// 6. Start HTTP server
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration
    let config = config::AppConfig::load()?;

    // 2. Initialize tracing/logging
    let default_filter = format!("dailyquote={},tower_http=debug", config.logging.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!("Starting DailyQuote...");
    tracing::info!(
        database = %config.database.path.display(),
        rotation_enabled = config.rotation.enabled,
        rotation_time = %config.rotation.time_of_day,
        "Configuration loaded"
    );

    // 3. Initialize metrics
    dailyquote::metrics::init_metrics();

    // 4. Initialize application state
    let state = AppState::new(&config).await?;

    // 5. Start background tasks
    if config.rotation.enabled {
        let at = config.rotation.time_of_day()?;
        scheduler::spawn_rotation_task(state.rotator.clone(), at);
    } else {
        tracing::info!("Daily rotation disabled; skipping scheduler");
    }

    // 6. Start HTTP server
    let app = dailyquote::build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
