use crate::provider::QuoteProvider;
use crate::storage::QuoteStore;
use log::{info, warn};
use quote_common::{Quote, Result};
use std::time::Duration;

/// Orchestrates one request: fetch upstream, then record the quote.
///
/// The fetch and the write run under independent deadlines. Persistence is
/// best-effort: a failed or late write is logged and the quote is still returned.
pub struct QuoteService {
    provider: QuoteProvider,
    store: QuoteStore,
    fetch_deadline: Duration,
    write_deadline: Duration,
}

impl QuoteService {
    /// Wire a provider and a store with their respective deadlines.
    pub fn new(
        provider: QuoteProvider,
        store: QuoteStore,
        fetch_deadline: Duration,
        write_deadline: Duration,
    ) -> Self {
        Self {
            provider,
            store,
            fetch_deadline,
            write_deadline,
        }
    }

    /// Fetch the current quote and try to store it.
    ///
    /// Only retrieval failures are returned; nothing is written when retrieval fails.
    pub async fn current_quote(&self) -> Result<Quote> {
        let quote = self.provider.fetch(self.fetch_deadline).await?;

        match self.store.persist(&quote, self.write_deadline).await {
            Ok(()) => info!(
                "Database storage complete: {}/{} bid={}",
                quote.code, quote.codein, quote.bid
            ),
            Err(e) => warn!("Quote not persisted: {}", e),
        }

        Ok(quote)
    }
}
