//! Centralized state container for the quote widget.
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - `QuoteState` snapshot
//! - `intent.rs` - requested transitions
//! - `reducer.rs` - pure transition function
//!
//! `QuoteStore` owns the current snapshot and serializes all transitions
//! through `dispatch`.

pub mod mvi;

mod intent;
mod reducer;
mod state;

pub use intent::QuoteIntent;
pub use reducer::QuoteReducer;
pub use state::{FetchStatus, QuoteState};

use crate::random::{self, RandomSource};
use mvi::Reducer;

/// Owner of the current `QuoteState`.
#[derive(Debug, Default)]
pub struct QuoteStore {
    state: QuoteState,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuoteState {
        &self.state
    }

    /// Run the reducer and replace the current snapshot.
    pub fn dispatch(&mut self, intent: QuoteIntent) {
        let kind = intent.kind();
        let previous = std::mem::take(&mut self.state);
        self.state = QuoteReducer::reduce(previous, intent);
        tracing::debug!(
            intent = kind,
            status = ?self.state.status,
            quotes = self.state.quotes.len(),
            "quote state transition"
        );
    }

    /// Select a random quote from the loaded collection.
    ///
    /// Returns `false` and leaves the state untouched when nothing is loaded.
    pub fn select_random(&mut self, random: &mut dyn RandomSource) -> bool {
        let Some(quote) = random::choose(&self.state.quotes[..], random).cloned() else {
            tracing::debug!("select_random ignored: no quotes loaded");
            return false;
        };
        self.dispatch(QuoteIntent::QuoteSelected(quote));
        true
    }
}
