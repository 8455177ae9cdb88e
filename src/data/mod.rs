//! Data layer module
//!
//! Handles all quote persistence:
//! - `QuoteStore` contract and its typed failures
//! - SQLite implementation (`Database`)
//! - Row models and validated inputs

mod database;
mod models;
mod store;

pub use database::Database;
pub use models::*;
pub use store::{QuoteStore, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockQuoteStore;
