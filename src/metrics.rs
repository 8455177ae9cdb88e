//! Prometheus metrics registry and instruments.
//!
//! This module is framework-agnostic and can be used from any layer.

use lazy_static::lazy_static;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // Database Metrics
    pub static ref DB_QUERIES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("dailyquote_db_queries_total", "Total number of database queries"),
        &["operation", "table"]
    ).expect("metric can be created");

    // Quote Metrics
    pub static ref QUOTES_TOTAL: IntGauge = IntGauge::new(
        "dailyquote_quotes_total",
        "Current number of stored quotes"
    ).expect("metric can be created");

    // Rotation Metrics
    pub static ref ROTATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("dailyquote_rotations_total", "Total number of daily quote rotation attempts"),
        &["trigger", "status"]
    ).expect("metric can be created");
    pub static ref ROTATION_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "dailyquote_rotation_duration_seconds",
            "Daily quote rotation duration in seconds"
        ).buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        &["trigger"]
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("dailyquote_errors_total", "Total number of error responses"),
        &["error_type"]
    ).expect("metric can be created");
}

/// Initialize metrics registry.
pub fn init_metrics() {
    REGISTRY
        .register(Box::new(DB_QUERIES_TOTAL.clone()))
        .expect("DB_QUERIES_TOTAL can be registered");
    REGISTRY
        .register(Box::new(QUOTES_TOTAL.clone()))
        .expect("QUOTES_TOTAL can be registered");
    REGISTRY
        .register(Box::new(ROTATIONS_TOTAL.clone()))
        .expect("ROTATIONS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(ROTATION_DURATION_SECONDS.clone()))
        .expect("ROTATION_DURATION_SECONDS can be registered");
    REGISTRY
        .register(Box::new(ERRORS_TOTAL.clone()))
        .expect("ERRORS_TOTAL can be registered");

    tracing::info!("Metrics registry initialized");
}
