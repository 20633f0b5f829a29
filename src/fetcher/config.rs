//! Configuration structure and defaults for the fetcher.

use crate::http::client::DEFAULT_TIMEOUT;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::time::Duration;

/// Size of the bounded worker pool: at most this many transfers run at once.
pub const DEFAULT_CONCURRENT_TRANSFERS: usize = 4;

/// Configuration structure for the fetcher.
#[derive(Clone, Debug)]
pub struct FetcherConfig {
    /// Directory where to store the fetched files.
    pub directory: std::path::PathBuf,
    /// Number of maximum concurrent transfers.
    pub concurrent_transfers: usize,
    /// Bound on connect and total request time for each transfer.
    pub timeout: Duration,
    /// Skip TLS certificate verification (tolerates self-signed endpoints).
    pub accept_invalid_certs: bool,
    /// Fetcher style options.
    pub style_options: StyleOptions,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            concurrent_transfers: DEFAULT_CONCURRENT_TRANSFERS,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            style_options: StyleOptions::default(),
            headers: None,
        }
    }
}
