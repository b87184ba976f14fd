use crate::quote::{Quote, QuoteCollection};
use crate::store::mvi::UiState;

/// Where the quote session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Waiting,
    /// Collection loaded, no quote picked yet.
    Received,
    /// A quote is on screen.
    NewQuoteSelected,
    /// Fetch failed or produced nothing usable.
    Failed { message: String },
}

/// Complete state of the quote widget.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteState {
    pub status: FetchStatus,
    pub quotes: QuoteCollection,
    /// Only `Some` while `status` is `NewQuoteSelected`.
    pub current: Option<Quote>,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            quotes: Vec::new().into(),
            current: None,
        }
    }
}

impl UiState for QuoteState {}

impl QuoteState {
    /// True while the view should show the loading indicator.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Waiting | FetchStatus::Received)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FetchStatus::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The quote on screen, if any.
    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }
}
