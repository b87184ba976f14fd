//! Quote records as served by the quote source.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "quoteText")]
    pub text: String,
    #[serde(rename = "quoteAuthor")]
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Shared, immutable quote collection. Replaced wholesale, never mutated.
pub type QuoteCollection = Arc<[Quote]>;

/// Top-level JSON document returned by the quote source.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesDocument {
    pub quotes: Vec<Quote>,
}

impl QuotesDocument {
    pub fn into_collection(self) -> QuoteCollection {
        self.quotes.into()
    }
}
