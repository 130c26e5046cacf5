//! Single-shot poll of the quote server and the append-only quote log.
//!
//! The response body is recorded verbatim: it is not parsed or validated, so
//! the log mirrors exactly what the server returned.
use log::{debug, warn};
use quote_common::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Default log file, relative to the working directory.
pub const LOG_PATH: &str = "cotacao.txt";
/// Label written in front of every recorded body.
pub const LOG_PREFIX: &str = "Dólar: ";

/// Blocking HTTP client for the quote endpoint.
pub struct QuotePoller {
    http: reqwest::blocking::Client,
    url: String,
}

impl QuotePoller {
    /// Create a poller for `url`. `deadline` bounds connect and transfer together.
    pub fn new(url: &str, deadline: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(deadline)
            .build()?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    /// GET the endpoint and return the whole body as raw bytes.
    ///
    /// A non-2xx status is logged but its body is still returned.
    pub fn fetch_raw(&self) -> Result<Vec<u8>> {
        let response = self.http.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("Server {} answered {}", self.url, status);
        }
        let body = response.bytes()?;
        Ok(body.to_vec())
    }
}

/// Append `LOG_PREFIX` followed by `body` to the file at `path`, creating it if needed.
///
/// No newline is added after the body.
pub fn append_quote(path: &Path, body: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    let mut entry = Vec::with_capacity(LOG_PREFIX.len() + body.len());
    entry.extend_from_slice(LOG_PREFIX.as_bytes());
    entry.extend_from_slice(body);
    file.write_all(&entry)?;
    debug!("Appended {} bytes to {}", body.len(), path.display());
    Ok(())
}

/// Fetch the quote once and record it. Returns the recorded body.
pub fn poll_once(url: &str, path: &Path, deadline: Duration) -> Result<Vec<u8>> {
    let body = QuotePoller::new(url, deadline)?.fetch_raw()?;
    append_quote(path, &body)?;
    Ok(body)
}
