//! Local stand-ins for the upstream provider and helpers shared by the tests.
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use quote_common::Quote;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub const UPSTREAM_PATH: &str = "/json/last/USD-BRL";

pub const UPSTREAM_PAYLOAD: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar/Real","high":"5.10","low":"5.00","varBid":"0.05","pctChange":"1.0","bid":"5.05","ask":"5.06","timestamp":"1690000000","create_date":"2025-01-01 00:00:00"}}"#;

pub fn sample_quote() -> Quote {
    Quote {
        code: "USD".to_string(),
        codein: "BRL".to_string(),
        name: "Dólar/Real".to_string(),
        high: "5.10".to_string(),
        low: "5.00".to_string(),
        var_bid: "0.05".to_string(),
        pct_change: "1.0".to_string(),
        bid: "5.05".to_string(),
        ask: "5.06".to_string(),
        timestamp: "1690000000".to_string(),
        create_date: "2025-01-01 00:00:00".to_string(),
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}{}", addr, UPSTREAM_PATH)
}

/// Serve `body` with `status` and return the upstream URL.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    serve(Router::new().route(UPSTREAM_PATH, get(move || async move { (status, body) }))).await
}

/// Serve the sample payload only after `delay`.
pub async fn spawn_slow_upstream(delay: Duration) -> String {
    serve(Router::new().route(
        UPSTREAM_PATH,
        get(move || async move {
            tokio::time::sleep(delay).await;
            UPSTREAM_PAYLOAD
        }),
    ))
    .await
}

pub fn row_count(path: &Path) -> i64 {
    Connection::open(path)
        .unwrap()
        .query_row("SELECT COUNT(*) FROM cotacao", [], |row| row.get(0))
        .unwrap()
}
