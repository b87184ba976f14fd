//! Reducer for the quote state.

use crate::error::QuoteError;
use crate::store::mvi::Reducer;

use super::intent::QuoteIntent;
use super::state::{FetchStatus, QuoteState};

/// Reducer for quote state transitions.
pub struct QuoteReducer;

impl Reducer for QuoteReducer {
    type State = QuoteState;
    type Intent = QuoteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuoteIntent::BeginFetch => QuoteState {
                status: FetchStatus::Waiting,
                quotes: Vec::new().into(),
                current: None,
            },

            // An empty collection can never satisfy a selection; fail instead
            // of entering Received with nothing to show.
            QuoteIntent::DataArrived(quotes) if quotes.is_empty() => QuoteState {
                status: FetchStatus::Failed {
                    message: QuoteError::EmptyCollection.to_string(),
                },
                quotes,
                current: None,
            },

            QuoteIntent::DataArrived(quotes) => QuoteState {
                status: FetchStatus::Received,
                quotes,
                current: None,
            },

            QuoteIntent::QuoteSelected(quote) => QuoteState {
                status: FetchStatus::NewQuoteSelected,
                current: Some(quote),
                ..state
            },

            QuoteIntent::FetchFailed(message) => QuoteState {
                status: FetchStatus::Failed { message },
                quotes: Vec::new().into(),
                current: None,
            },

            QuoteIntent::Noop => state,
        }
    }
}
