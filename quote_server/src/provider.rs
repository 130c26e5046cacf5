//! Upstream quote provider.
//!
//! Performs one GET against the configured URL and turns the body into a
//! `Quote`. The whole round trip (connect, headers, body) shares one deadline.
use log::debug;
use quote_common::{Quote, QuoteError, Result};
use std::time::Duration;

/// HTTP client bound to a single upstream URL and pair-code.
#[derive(Debug, Clone)]
pub struct QuoteProvider {
    http: reqwest::Client,
    url: String,
    pair: String,
}

impl QuoteProvider {
    /// Create a provider for `url`, extracting the quote stored under `pair`.
    pub fn new(url: &str, pair: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.to_string(),
            pair: pair.to_string(),
        }
    }

    /// Fetch and decode the current quote, giving up after `deadline`.
    ///
    /// A non-2xx answer is reported as `UpstreamStatus` without looking at the body.
    pub async fn fetch(&self, deadline: Duration) -> Result<Quote> {
        let body = tokio::time::timeout(deadline, self.download())
            .await
            .map_err(|_| QuoteError::Timeout(deadline))??;
        Quote::from_upstream(&body, &self.pair)
    }

    async fn download(&self) -> Result<Vec<u8>> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        debug!("Upstream {} answered {}", self.url, status);
        if !status.is_success() {
            return Err(QuoteError::UpstreamStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
