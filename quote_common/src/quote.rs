//! Quote data model and upstream payload decoding.
//!
//! The upstream provider wraps the quote in an object keyed by the pair-code,
//! e.g. `{"USDBRL": {...}}`, and encodes every numeric value as a JSON string.
//! `Quote` keeps them as text so no precision is lost between the provider,
//! the database and the client.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuoteError;
use crate::result::Result;

/// Pair-code of the USD/BRL quote.
pub const DEFAULT_PAIR: &str = "USDBRL";

/// Exchange rate of a currency pair as published upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Base currency code (e.g., `USD`).
    pub code: String,
    /// Quote currency code (e.g., `BRL`).
    pub codein: String,
    /// Display name of the pair.
    pub name: String,
    /// Highest price of the period.
    pub high: String,
    /// Lowest price of the period.
    pub low: String,
    /// Absolute bid variation.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Bid price.
    pub bid: String,
    /// Ask price.
    pub ask: String,
    /// Unix timestamp in seconds, as sent upstream.
    pub timestamp: String,
    /// Creation date, as sent upstream.
    pub create_date: String,
}

impl Quote {
    /// Decode an upstream response body: unwrap the object stored under `pair`,
    /// then strict-decode it into a `Quote`.
    ///
    /// Every field must be present and must be a JSON string. Returns
    /// `MissingPair` when the key is absent and `SerdeJson` when either the
    /// outer document or the nested object is malformed.
    pub fn from_upstream(body: &[u8], pair: &str) -> Result<Quote> {
        let mut outer: Value = serde_json::from_slice(body)?;
        let nested = outer
            .as_object_mut()
            .ok_or_else(|| QuoteError::Format("upstream payload is not a JSON object".to_string()))?
            .remove(pair)
            .ok_or_else(|| QuoteError::MissingPair(pair.to_string()))?;

        let quote = serde_json::from_value(nested)?;
        Ok(quote)
    }

    /// Encode the quote to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}
