//! Conversion functions from database models to API DTOs

use crate::api::dto::QuoteResponse;
use crate::data::Quote;

/// Convert Quote to QuoteResponse
pub fn quote_to_response(quote: Quote) -> QuoteResponse {
    QuoteResponse {
        id: quote.id,
        text: quote.text,
        author: quote.author,
        created_at: quote.created_at,
        is_daily_quote: quote.is_daily,
    }
}

/// Convert a list of quotes, preserving order
pub fn quotes_to_response(quotes: Vec<Quote>) -> Vec<QuoteResponse> {
    quotes.into_iter().map(quote_to_response).collect()
}
