//! Remote quote source.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::SourceConfig;
use crate::error::QuoteError;
use crate::quote::{QuoteCollection, QuotesDocument};

/// Anything that can produce a quote collection.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self) -> Result<QuoteCollection, QuoteError>;
}

#[async_trait]
impl<T: QuoteSource + ?Sized> QuoteSource for Arc<T> {
    async fn fetch(&self) -> Result<QuoteCollection, QuoteError> {
        (**self).fetch().await
    }
}

/// Fetches `{"quotes": [...]}` over HTTP GET.
pub struct HttpQuoteSource {
    client: Client,
    endpoint: String,
    request_timeout: Duration,
}

impl HttpQuoteSource {
    pub fn new(config: &SourceConfig) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|source| QuoteError::Network {
                endpoint: config.endpoint.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        })
    }

    async fn do_fetch(&self) -> Result<QuoteCollection, QuoteError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| QuoteError::Network {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                status: status.as_u16(),
            });
        }

        let document: QuotesDocument = response
            .json()
            .await
            .map_err(|source| QuoteError::Decode { source })?;

        Ok(document.into_collection())
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> Result<QuoteCollection, QuoteError> {
        tracing::info!(endpoint = %self.endpoint, "fetching quotes");
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(QuoteError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}
