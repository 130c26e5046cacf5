//! Endpoints, ports and deadlines shared by client and server.
use std::time::Duration;

/// TCP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the current quote.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream provider returning the latest USD/BRL quote.
pub const UPSTREAM_URL: &str = "http://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Budget for one upstream round trip.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);
/// Budget for one best-effort database insert.
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(10);
/// Overall budget for a single client poll.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(300);

/// Helper to format an address like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Full URL of the quote endpoint on `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_PATH)
}
