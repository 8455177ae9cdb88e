//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration files (config/default.toml, config/local.toml)
//! 3. Environment variables (override)

use chrono::NaiveTime;
use serde::Deserialize;
use std::path::PathBuf;

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rotation: RotationConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Port number (e.g., 8080)
    pub port: u16,
}

/// Database configuration (SQLite only)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file
    pub path: PathBuf,
}

/// Daily quote rotation
#[derive(Debug, Clone, Deserialize)]
pub struct RotationConfig {
    /// Run the daily rotation timer
    pub enabled: bool,
    /// UTC time of day for the rotation, "HH:MM" (default: "00:00")
    pub time_of_day: String,
    /// Rotate once at startup if no daily quote is set
    pub bootstrap_on_start: bool,
}

impl RotationConfig {
    /// Parsed `time_of_day`
    pub fn time_of_day(&self) -> Result<NaiveTime, crate::error::AppError> {
        NaiveTime::parse_from_str(self.time_of_day.trim(), TIME_OF_DAY_FORMAT).map_err(|e| {
            crate::error::AppError::Config(format!(
                "rotation.time_of_day must be HH:MM (got {:?}): {}",
                self.time_of_day, e
            ))
        })
    }
}

/// Startup seeding
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Insert sample quotes into an empty database
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (DAILYQUOTE__*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.path", "data/dailyquote.db")?
            .set_default("rotation.enabled", true)?
            .set_default("rotation.time_of_day", "00:00")?
            .set_default("rotation.bootstrap_on_start", true)?
            .set_default("seed.enabled", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (DAILYQUOTE__*)
            .add_source(
                Environment::with_prefix("DAILYQUOTE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub(crate) fn validate(&self) -> Result<(), crate::error::AppError> {
        self.rotation.time_of_day()?;

        if !["pretty", "json"].contains(&self.logging.format.as_str()) {
            return Err(crate::error::AppError::Config(format!(
                "logging.format must be \"pretty\" or \"json\" (got {:?})",
                self.logging.format
            )));
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(crate::error::AppError::Config(
                "database.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
