mod common;

use common::mock_source::{MockQuoteSource, MockResponse};
use quote_machine::error::QuoteError;
use quote_machine::source::{HttpQuoteSource, QuoteSource};

#[tokio::test]
async fn fetch_parses_document() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json(common::SAMPLE_DOCUMENT)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let quotes = source.fetch().await.unwrap();

    assert_eq!(quotes.to_vec(), common::sample_quotes());
    assert_eq!(mock.hits().await, vec!["/db.json".to_string()]);
}

#[tokio::test]
async fn non_success_status_is_error() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::error(503)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Status { status: 503 }));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json("<html>not json</html>")).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Decode { .. }));
}

#[tokio::test]
async fn wrong_shape_is_decode_error() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json(r#"{"items": []}"#)).await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Decode { .. }));
}

#[tokio::test]
async fn slow_source_times_out() {
    let mock = MockQuoteSource::start().await;
    mock.enqueue(MockResponse::json(common::SAMPLE_DOCUMENT).with_delay(1500))
        .await;

    let source = HttpQuoteSource::new(&common::source_config(mock.endpoint())).unwrap();
    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Timeout { seconds: 1 }));
}

#[tokio::test]
async fn unreachable_source_is_network_error() {
    let endpoint = format!("http://127.0.0.1:{}/db.json", common::closed_port());
    let source = HttpQuoteSource::new(&common::source_config(endpoint)).unwrap();

    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Network { .. }));
}
