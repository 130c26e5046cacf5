//! HTTP surface of the quote server.
//!
//! - `GET /` — static banner.
//! - `GET /cotacao` — the current quote as JSON, or a generic 500.
use crate::service::QuoteService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use log::{error, warn};
use quote_common::net::QUOTE_PATH;
use std::sync::Arc;

/// Body of the root route.
pub const BANNER: &str = "# Cotação do dólar";
/// Body sent on any quote failure. Internal details stay in the server log.
pub const ERROR_MESSAGE: &str = "Sorry, something went wrong";

/// Build the router around a shared `QuoteService`.
pub fn router(service: Arc<QuoteService>) -> Router {
    Router::new()
        .route("/", get(home))
        .route(QUOTE_PATH, get(quote))
        .with_state(service)
}

async fn home() -> &'static str {
    BANNER
}

async fn quote(State(service): State<Arc<QuoteService>>) -> Response {
    match service.current_quote().await {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => {
            if e.is_decode() {
                error!("ERROR: {}", e);
            } else {
                warn!("Upstream unavailable: {}", e);
            }
            (StatusCode::INTERNAL_SERVER_ERROR, ERROR_MESSAGE).into_response()
        }
    }
}
