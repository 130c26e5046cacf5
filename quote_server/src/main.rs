//! Quote Server binary.
//!
//! Serves `GET /` (a text banner) and `GET /cotacao` (the latest USD/BRL quote
//! as JSON, stored in SQLite on the way out). With no flags it binds
//! `0.0.0.0:8080`, fetches from the awesomeapi endpoint under a 200 ms deadline
//! and writes to `./cotacao.db` under a 10 ms deadline.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --database ./cotacao.db --write-timeout-ms 50
//! ```
use clap::Parser;
use log::info;
use quote_server::app;
use quote_server::args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();

    info!("Opening database {}", args.database.display());
    let app = app(&args)?;

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("Quote server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
