//! Startup seeding
//!
//! Fills an empty store with sample quotes. A store that already holds any
//! quote is left alone.

use crate::data::{QuoteStore, StoreResult};

/// Sample quotes as (text, author)
pub const SAMPLE_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    (
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
    (
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
    ),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
    (
        "Your time is limited, don't waste it living someone else's life.",
        "Steve Jobs",
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
];

/// Insert the sample quotes if the store is empty
///
/// No sample is flagged daily; the first rotation picks one.
///
/// # Returns
/// Number of quotes inserted (0 if the store already had data)
pub async fn seed_if_empty(store: &dyn QuoteStore) -> StoreResult<usize> {
    if store.count().await? > 0 {
        tracing::info!("Database already contains data, skipping initialization");
        return Ok(0);
    }

    tracing::info!("Initializing database with sample quotes...");
    for (text, author) in SAMPLE_QUOTES {
        store.insert(text, author).await?;
    }
    tracing::info!(count = SAMPLE_QUOTES.len(), "Database initialized with sample quotes");

    Ok(SAMPLE_QUOTES.len())
}
