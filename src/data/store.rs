//! Quote store contract
//!
//! Services and the rotator only ever see `dyn QuoteStore`; the SQLite
//! `Database` is injected at startup.

use async_trait::async_trait;
use thiserror::Error;

use super::models::Quote;

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// No quote with this ID
    #[error("quote {0} not found")]
    NotFound(i64),

    /// No quote is currently flagged daily
    #[error("no daily quote is set")]
    NoDailyQuote,

    /// Random pick on a store with no quotes
    #[error("store is empty")]
    EmptyStore,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations over quote rows
///
/// Each single-row mutation is atomic. Multi-step sequences (daily rotation)
/// are serialized by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Point lookup
    async fn get(&self, id: i64) -> StoreResult<Quote>;

    /// All quotes, ordered by ID
    async fn list_all(&self) -> StoreResult<Vec<Quote>>;

    /// Quotes whose author matches exactly (case-sensitive)
    async fn list_by_author(&self, author: &str) -> StoreResult<Vec<Quote>>;

    /// Distinct authors in lexicographic order
    async fn list_authors(&self) -> StoreResult<Vec<String>>;

    /// The quote currently flagged daily
    async fn get_daily(&self) -> StoreResult<Quote>;

    /// One quote chosen uniformly at random
    async fn pick_random(&self) -> StoreResult<Quote>;

    /// Insert a new, non-daily quote
    async fn insert(&self, text: &str, author: &str) -> StoreResult<Quote>;

    /// Overwrite text and author; the daily flag is left untouched
    async fn update(&self, id: i64, text: &str, author: &str) -> StoreResult<Quote>;

    /// Set or clear the daily flag. Only the rotator calls this.
    async fn set_daily_flag(&self, id: i64, value: bool) -> StoreResult<Quote>;

    async fn delete(&self, id: i64) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<i64>;
}
