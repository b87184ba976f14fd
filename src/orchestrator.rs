//! Fetch orchestration: one request, three ordered transitions.
//!
//! ```text
//! BeginFetch ──(await source)──→ DataArrived ──(random pick)──→ QuoteSelected
//!                     │
//!                     └── error ──→ FetchFailed
//! ```

use parking_lot::Mutex;

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::random::{self, RandomSource};
use crate::source::QuoteSource;
use crate::store::QuoteIntent;

/// Receiver of intents produced by the orchestrator.
///
/// Implementations must deliver intents in the order they are dispatched.
pub trait IntentSink: Send + Sync {
    fn dispatch(&self, intent: QuoteIntent);
}

/// Collects intents in memory, in dispatch order.
impl IntentSink for Mutex<Vec<QuoteIntent>> {
    fn dispatch(&self, intent: QuoteIntent) {
        self.lock().push(intent);
    }
}

pub struct FetchOrchestrator<S, R> {
    source: S,
    random: R,
}

impl<S, R> FetchOrchestrator<S, R>
where
    S: QuoteSource,
    R: RandomSource,
{
    pub fn new(source: S, random: R) -> Self {
        Self { source, random }
    }

    /// Fetch the collection and select the initial quote.
    ///
    /// `BeginFetch` is dispatched before the source is polled. Failures are
    /// dispatched as `FetchFailed` and also returned.
    pub async fn run(&mut self, sink: &dyn IntentSink) -> Result<Quote, QuoteError> {
        sink.dispatch(QuoteIntent::BeginFetch);

        let quotes = match self.source.fetch().await {
            Ok(quotes) => quotes,
            Err(err) => {
                tracing::warn!(error = %err, "quote fetch failed");
                sink.dispatch(QuoteIntent::FetchFailed(err.to_string()));
                return Err(err);
            }
        };

        tracing::info!(count = quotes.len(), "quotes received");
        sink.dispatch(QuoteIntent::DataArrived(quotes.clone()));

        let Some(quote) = random::choose(&quotes[..], &mut self.random).cloned() else {
            tracing::warn!("quote source returned an empty collection");
            return Err(QuoteError::EmptyCollection);
        };
        sink.dispatch(QuoteIntent::QuoteSelected(quote.clone()));
        Ok(quote)
    }
}
