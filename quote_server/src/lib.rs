//! Quote HTTP server.
//!
//! On every `GET /cotacao` the server fetches the latest quote from the upstream
//! provider, stores a JSON copy in SQLite and returns the quote to the caller.
//! The building blocks are:
//!
//! - `QuoteProvider` — one deadline-bounded GET to the upstream and the payload decode.
//! - `QuoteStore` — the SQLite handle, created once and shared by all requests.
//! - `QuoteService` — runs fetch and best-effort persistence with separate deadlines.
//! - `routes` — the axum router exposing `/` and `/cotacao`.
//!
//! Retrieval failures become a generic 500; storage failures are logged and ignored.
#![warn(missing_docs)]
pub mod args;
pub mod provider;
pub mod routes;
pub mod service;
pub mod storage;

#[cfg(test)]
mod test_support;

use crate::args::Args;
use crate::provider::QuoteProvider;
use crate::service::QuoteService;
use crate::storage::{QuoteStore, StorageError};
use axum::Router;
use std::sync::Arc;

/// Open storage and assemble the router described by `args`.
pub fn app(args: &Args) -> Result<Router, StorageError> {
    let store = QuoteStore::open(&args.database, args.write_timeout())?;
    let provider = QuoteProvider::new(&args.upstream_url, &args.pair);
    let service = QuoteService::new(provider, store, args.fetch_timeout(), args.write_timeout());
    Ok(routes::router(Arc::new(service)))
}
