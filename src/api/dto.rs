//! API response DTOs
//!
//! Field names are fixed for client compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote response
///
/// `updated_at` is internal to the store and not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub is_daily_quote: bool,
}
