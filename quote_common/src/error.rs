//! Error types shared between client and server.
//!
//! `QuoteError` covers everything that can go wrong while obtaining a quote:
//! transport failures, upstream refusals and payload decoding. Storage errors
//! are operational and live with the server's storage layer instead.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type for quote retrieval and recording.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// DNS, connect or transfer failure reported by the HTTP client.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The round trip did not finish within its deadline.
    #[error("Deadline of {0:?} exceeded")]
    Timeout(Duration),

    /// Upstream answered with a non-2xx status code.
    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),

    /// Malformed JSON or a nested object that does not match `Quote`.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The pair-code key is absent from the upstream payload.
    #[error("Missing pair `{0}` in upstream payload")]
    MissingPair(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

impl QuoteError {
    /// Returns `true` when the error comes from the payload rather than the transport.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            QuoteError::SerdeJson(_) | QuoteError::MissingPair(_) | QuoteError::Format(_)
        )
    }
}
