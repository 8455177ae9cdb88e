//! Quote service
//!
//! One method per client use case. Input is validated before any store
//! call; store-level not-found outcomes become `AppError::QuoteNotFound`.

use std::sync::Arc;

use super::rotator::DailyQuoteRotator;
use crate::data::{Quote, QuoteRequest, QuoteStore};
use crate::error::AppError;

/// Quote service
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
    rotator: Arc<DailyQuoteRotator>,
}

impl QuoteService {
    /// Create new quote service
    pub fn new(store: Arc<dyn QuoteStore>, rotator: Arc<DailyQuoteRotator>) -> Self {
        Self { store, rotator }
    }

    pub async fn list_all(&self) -> Result<Vec<Quote>, AppError> {
        tracing::info!("Fetching all quotes");
        Ok(self.store.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Quote, AppError> {
        tracing::info!(quote_id = id, "Fetching quote");
        Ok(self.store.get(id).await?)
    }

    /// Create a quote
    ///
    /// # Errors
    /// `AppError::Validation` if text or author violate their constraints;
    /// nothing is written in that case.
    pub async fn create(&self, request: &QuoteRequest) -> Result<Quote, AppError> {
        request.validate()?;
        tracing::info!(author = %request.author, "Creating new quote");

        let quote = self.store.insert(&request.text, &request.author).await?;
        tracing::info!(quote_id = quote.id, "Quote created");

        Ok(quote)
    }

    /// Replace text and author of an existing quote
    ///
    /// The daily flag is never changed here.
    pub async fn update(&self, id: i64, request: &QuoteRequest) -> Result<Quote, AppError> {
        request.validate()?;
        tracing::info!(quote_id = id, "Updating quote");

        let quote = self
            .store
            .update(id, &request.text, &request.author)
            .await?;
        tracing::info!(quote_id = id, "Quote updated");

        Ok(quote)
    }

    /// Delete a quote
    ///
    /// Runs under the rotation lock so a delete of the daily quote cannot
    /// interleave with a rotation. Deleting the daily quote leaves no daily
    /// quote until the next rotation.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::info!(quote_id = id, "Deleting quote");

        let _guard = self.rotator.exclusive().await;
        self.store.delete(id).await?;
        tracing::info!(quote_id = id, "Quote deleted");

        Ok(())
    }

    pub async fn get_daily(&self) -> Result<Quote, AppError> {
        tracing::info!("Fetching daily quote");
        Ok(self.store.get_daily().await?)
    }

    pub async fn get_random(&self) -> Result<Quote, AppError> {
        tracing::info!("Fetching random quote");
        Ok(self.store.pick_random().await?)
    }

    pub async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>, AppError> {
        tracing::info!(author = %author, "Fetching quotes by author");
        Ok(self.store.list_by_author(author).await?)
    }

    pub async fn list_authors(&self) -> Result<Vec<String>, AppError> {
        tracing::info!("Fetching all authors");
        Ok(self.store.list_authors().await?)
    }

    /// Rotate the daily quote on demand (administrative)
    pub async fn rotate_daily(&self) -> Result<Quote, AppError> {
        tracing::info!("Manual daily quote rotation requested");
        Ok(self.rotator.rotate().await?)
    }
}
