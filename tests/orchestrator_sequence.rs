mod common;

use common::mock_source::{MockQuoteSource, MockResponse};
use parking_lot::Mutex;
use quote_machine::orchestrator::FetchOrchestrator;
use quote_machine::random::SeededRandom;
use quote_machine::source::HttpQuoteSource;
use quote_machine::store::{FetchStatus, QuoteIntent, QuoteStore};

fn kinds(intents: &[QuoteIntent]) -> Vec<&'static str> {
    intents.iter().map(QuoteIntent::kind).collect()
}

#[tokio::test]
async fn transitions_arrive_in_order() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json(common::SAMPLE_DOCUMENT)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let mut orchestrator = FetchOrchestrator::new(source, SeededRandom::new(8));
    let sink = Mutex::new(Vec::new());

    let picked = orchestrator.run(&sink).await.unwrap();
    let intents = sink.into_inner();

    assert_eq!(
        kinds(&intents),
        vec!["begin_fetch", "data_arrived", "quote_selected"]
    );
    assert!(common::sample_quotes().contains(&picked));
    assert_eq!(intents[2], QuoteIntent::QuoteSelected(picked));
    assert_eq!(mock.hits().await.len(), 1);
}

#[tokio::test]
async fn replaying_intents_into_store_shows_quote() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json(common::SAMPLE_DOCUMENT)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let mut orchestrator = FetchOrchestrator::new(source, SeededRandom::new(1));
    let sink = Mutex::new(Vec::new());
    orchestrator.run(&sink).await.unwrap();

    let mut store = QuoteStore::new();
    for intent in sink.into_inner() {
        store.dispatch(intent);
    }

    assert_eq!(store.state().status, FetchStatus::NewQuoteSelected);
    assert_eq!(store.state().quotes.len(), 3);
    assert!(store.state().current.is_some());
}

#[tokio::test]
async fn server_error_surfaces_as_failed_status() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::error(500)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let mut orchestrator = FetchOrchestrator::new(source, SeededRandom::new(1));
    let sink = Mutex::new(Vec::new());
    assert!(orchestrator.run(&sink).await.is_err());

    let intents = sink.into_inner();
    assert_eq!(kinds(&intents), vec!["begin_fetch", "fetch_failed"]);

    let mut store = QuoteStore::new();
    for intent in intents {
        store.dispatch(intent);
    }
    assert_eq!(
        store.state().error_message(),
        Some("Quote source returned HTTP 500")
    );
}

#[tokio::test]
async fn empty_document_never_selects() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json(r#"{"quotes": []}"#)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let mut orchestrator = FetchOrchestrator::new(source, SeededRandom::new(1));
    let sink = Mutex::new(Vec::new());
    assert!(orchestrator.run(&sink).await.is_err());

    let intents = sink.into_inner();
    assert_eq!(kinds(&intents), vec!["begin_fetch", "data_arrived"]);

    let mut store = QuoteStore::new();
    for intent in intents {
        store.dispatch(intent);
    }
    assert!(store.state().is_failed());
    assert!(store.state().current.is_none());
}
