use crate::quote::{Quote, QuoteCollection};
use crate::store::mvi::Intent;

/// Requested transitions of the quote state.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteIntent {
    /// A fetch is starting; drop whatever was loaded before.
    BeginFetch,
    /// The source answered with this collection.
    DataArrived(QuoteCollection),
    /// Show this quote.
    QuoteSelected(Quote),
    /// The fetch failed; the message is shown to the user.
    FetchFailed(String),
    /// Leaves the state untouched.
    Noop,
}

impl Intent for QuoteIntent {}

impl QuoteIntent {
    /// Name used in transition logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteIntent::BeginFetch => "begin_fetch",
            QuoteIntent::DataArrived(_) => "data_arrived",
            QuoteIntent::QuoteSelected(_) => "quote_selected",
            QuoteIntent::FetchFailed(_) => "fetch_failed",
            QuoteIntent::Noop => "noop",
        }
    }
}
