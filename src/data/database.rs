//! SQLite database operations
//!
//! All quote persistence goes through this module.
//! Uses SQLx with embedded migrations.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use super::models::Quote;
use super::store::{QuoteStore, StoreError, StoreResult};
use crate::error::AppError;

const QUOTE_COLUMNS: &str = "id, text, author, created_at, updated_at, is_daily";

fn record_query(operation: &str) {
    crate::metrics::DB_QUERIES_TOTAL
        .with_label_values(&[operation, "quotes"])
        .inc();
}

/// Database connection pool wrapper
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    // =========================================================================
    // Connection
    // =========================================================================

    /// Connect to SQLite database
    ///
    /// Creates the database file if it doesn't exist.
    /// Runs pending migrations automatically.
    ///
    /// # Arguments
    /// * `path` - Path to SQLite database file
    ///
    /// # Errors
    /// Returns error if connection or migration fails
    pub async fn connect(path: &Path) -> Result<Self, AppError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Database(sqlx::Error::Io(e)))?;
        }

        if path.to_str().is_none() {
            return Err(AppError::Config(format!(
                "database path must be valid UTF-8: {}",
                path.display()
            )));
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Migration failed: {}", e);
                AppError::Internal(anyhow::anyhow!("Migration failed: {}", e))
            })?;

        tracing::info!("Database connected and migrated successfully");

        Ok(Self { pool })
    }

    async fn fetch_quote(&self, id: i64) -> StoreResult<Quote> {
        sqlx::query_as::<_, Quote>(&format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }
}

#[async_trait]
impl QuoteStore for Database {
    async fn get(&self, id: i64) -> StoreResult<Quote> {
        record_query("get");
        self.fetch_quote(id).await
    }

    async fn list_all(&self) -> StoreResult<Vec<Quote>> {
        record_query("list_all");
        let quotes =
            sqlx::query_as::<_, Quote>(&format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(quotes)
    }

    async fn list_by_author(&self, author: &str) -> StoreResult<Vec<Quote>> {
        record_query("list_by_author");
        let quotes = sqlx::query_as::<_, Quote>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes WHERE author = ? ORDER BY id"
        ))
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    async fn list_authors(&self) -> StoreResult<Vec<String>> {
        record_query("list_authors");
        let authors =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT author FROM quotes ORDER BY author")
                .fetch_all(&self.pool)
                .await?;

        Ok(authors)
    }

    async fn get_daily(&self) -> StoreResult<Quote> {
        record_query("get_daily");
        sqlx::query_as::<_, Quote>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes WHERE is_daily = 1"
        ))
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NoDailyQuote)
    }

    /// Count and offset are read inside one transaction so the offset is
    /// always within the snapshot it was drawn from.
    async fn pick_random(&self) -> StoreResult<Quote> {
        record_query("pick_random");
        let mut tx = self.pool.begin().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes")
            .fetch_one(&mut *tx)
            .await?;
        if count == 0 {
            return Err(StoreError::EmptyStore);
        }

        let offset = rand::thread_rng().gen_range(0..count);
        let quote = sqlx::query_as::<_, Quote>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY id LIMIT 1 OFFSET ?"
        ))
        .bind(offset)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(quote)
    }

    async fn insert(&self, text: &str, author: &str) -> StoreResult<Quote> {
        record_query("insert");
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO quotes (text, author, created_at, updated_at, is_daily)
            VALUES (?, ?, ?, ?, 0)
            "#,
        )
        .bind(text)
        .bind(author)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Quote {
            id: result.last_insert_rowid(),
            text: text.to_string(),
            author: author.to_string(),
            created_at: now,
            updated_at: now,
            is_daily: false,
        })
    }

    async fn update(&self, id: i64, text: &str, author: &str) -> StoreResult<Quote> {
        record_query("update");
        let mut tx = self.pool.begin().await?;

        let result =
            sqlx::query("UPDATE quotes SET text = ?, author = ?, updated_at = ? WHERE id = ?")
                .bind(text)
                .bind(author)
                .bind(Utc::now())
                .bind(id)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        let quote =
            sqlx::query_as::<_, Quote>(&format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ?"))
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(quote)
    }

    async fn set_daily_flag(&self, id: i64, value: bool) -> StoreResult<Quote> {
        record_query("set_daily_flag");
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE quotes SET is_daily = ?, updated_at = ? WHERE id = ?")
            .bind(value)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        let quote =
            sqlx::query_as::<_, Quote>(&format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ?"))
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(quote)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        record_query("delete");
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        record_query("count");
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
