//! Quote Client binary.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
use clap::Parser;
use log::info;
use quote_client::args::Args;
use quote_client::poller::poll_once;
use quote_common::Result;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    info!("Requesting quote from {}", args.url);
    let body = poll_once(&args.url, &args.output, args.timeout())?;
    info!(
        "Quote recorded in {}: {}",
        args.output.display(),
        String::from_utf8_lossy(&body)
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
