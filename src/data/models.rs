//! Data models
//!
//! Rust structs representing database rows and validated inputs.
//! Quote IDs are SQLite row IDs; timestamps are chrono UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

// =============================================================================
// Constraints
// =============================================================================

/// Minimum quote text length, in characters
pub const TEXT_MIN_CHARS: usize = 10;
/// Maximum quote text length, in characters
pub const TEXT_MAX_CHARS: usize = 500;
/// Maximum author name length, in characters
pub const AUTHOR_MAX_CHARS: usize = 100;

// =============================================================================
// Quote
// =============================================================================

/// A stored quote
///
/// At most one row in the store has `is_daily = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation, including daily flag flips
    pub updated_at: DateTime<Utc>,
    /// Whether this is the current quote of the day
    pub is_daily: bool,
}

// =============================================================================
// Quote Request
// =============================================================================

/// Text and author submitted for create/update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
}

impl QuoteRequest {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Check length, blankness and NUL constraints
    ///
    /// Every violated constraint is reported, joined by `"; "`.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if any constraint fails
    pub fn validate(&self) -> Result<(), AppError> {
        let mut violations = Vec::new();

        let text_chars = self.text.chars().count();
        if self.text.trim().is_empty() {
            violations.push("Quote text cannot be empty");
        }
        if !(TEXT_MIN_CHARS..=TEXT_MAX_CHARS).contains(&text_chars) {
            violations.push("Quote must be between 10 and 500 characters");
        }
        // SQLite length() stops at the first NUL
        if self.text.contains('\0') {
            violations.push("Quote text cannot contain NUL characters");
        }

        if self.author.trim().is_empty() {
            violations.push("Author cannot be empty");
        }
        if self.author.chars().count() > AUTHOR_MAX_CHARS {
            violations.push("Author name cannot exceed 100 characters");
        }
        if self.author.contains('\0') {
            violations.push("Author cannot contain NUL characters");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations.join("; ")))
        }
    }
}
