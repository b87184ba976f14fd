//! Error types for fetching quotes and building share links.

use thiserror::Error;

/// Errors that can occur while loading quotes or sharing one.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Failed to reach the quote source.
    #[error("Could not reach quote source '{endpoint}': {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The quote source answered with a non-success status.
    #[error("Quote source returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON document.
    #[error("Malformed quote document: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete in time.
    #[error("Quote source timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The source returned a document with no quotes in it.
    #[error("Quote source returned no quotes")]
    EmptyCollection,

    /// The configured intent URL is not a valid base URL.
    #[error("Invalid share intent URL '{url}': {source}")]
    InvalidShareBase {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl QuoteError {
    /// Short message suitable for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            QuoteError::Network { .. } => "Could not reach the quote source",
            QuoteError::Status { .. } => "The quote source refused the request",
            QuoteError::Decode { .. } => "The quote source sent an unreadable response",
            QuoteError::Timeout { .. } => "The quote source took too long to answer",
            QuoteError::EmptyCollection => "The quote source has no quotes",
            QuoteError::InvalidShareBase { .. } => "The share link is misconfigured",
        }
    }
}
