//! API layer
//!
//! HTTP handlers for:
//! - Quote REST endpoints
//! - Metrics (Prometheus)

mod converters;
mod dto;
mod extract;
pub mod metrics;
mod quotes;

pub use converters::*;
pub use dto::*;

pub use metrics::metrics_router;
pub use quotes::quotes_router;
