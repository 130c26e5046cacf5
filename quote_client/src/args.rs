//! Command-line arguments for the Quote Client.
use crate::poller::LOG_PATH;
use clap::Parser;
use quote_common::net::{quote_url, SERVER_PORT};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint of the server.
    #[clap(long, default_value_t = quote_url("localhost", SERVER_PORT))]
    pub url: String,

    /// File the quote is appended to.
    #[clap(long, default_value = LOG_PATH)]
    pub output: PathBuf,

    /// Overall deadline for the request, in seconds.
    #[clap(long, default_value_t = 300)]
    pub timeout_secs: u64,
}

impl Args {
    /// Overall request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
