//! Service layer
//!
//! Contains business logic separated from HTTP handlers.
//! Services orchestrate the quote store and the daily rotation.

mod quote;
mod rotator;

pub use quote::QuoteService;
pub use rotator::{DailyQuoteRotator, RotationOutcome};
