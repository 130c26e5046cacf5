//! Command-line arguments for the Quote Server.
//!
//! Every flag defaults to the built-in value, so running without arguments
//! serves `/cotacao` on port 8080 backed by `./cotacao.db`.
use crate::storage::DATABASE_PATH;
use clap::Parser;
use quote_common::net::{addr, SERVER_PORT, UPSTREAM_URL};
use quote_common::quote::DEFAULT_PAIR;
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server binds to.
    #[clap(long, default_value_t = addr("0.0.0.0", SERVER_PORT))]
    pub bind: String,

    /// Upstream endpoint returning the latest quote.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Key of the quote object inside the upstream payload.
    #[clap(long, default_value = DEFAULT_PAIR)]
    pub pair: String,

    /// SQLite database file.
    #[clap(long, default_value = DATABASE_PATH)]
    pub database: PathBuf,

    /// Deadline for the upstream round trip, in milliseconds.
    #[clap(long, default_value_t = 200)]
    pub fetch_timeout_ms: u64,

    /// Deadline for the database insert, in milliseconds.
    #[clap(long, default_value_t = 10)]
    pub write_timeout_ms: u64,
}

impl Args {
    /// Upstream fetch deadline.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Database write deadline.
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::net::{FETCH_TIMEOUT, WRITE_TIMEOUT};

    #[test]
    fn defaults_match_built_in_values() {
        let args = Args::try_parse_from(["quote_server"]).unwrap();
        assert_eq!(args.bind, "0.0.0.0:8080");
        assert_eq!(args.upstream_url, UPSTREAM_URL);
        assert_eq!(args.pair, "USDBRL");
        assert_eq!(args.database, PathBuf::from("./cotacao.db"));
        assert_eq!(args.fetch_timeout(), FETCH_TIMEOUT);
        assert_eq!(args.write_timeout(), WRITE_TIMEOUT);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "quote_server",
            "--bind",
            "127.0.0.1:9090",
            "--write-timeout-ms",
            "250",
        ])
        .unwrap();
        assert_eq!(args.bind, "127.0.0.1:9090");
        assert_eq!(args.write_timeout(), Duration::from_millis(250));
    }
}
