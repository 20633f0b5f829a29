//! Builder pattern implementation for creating Fetcher instances.
//!
//! # Examples
//!
//! ```rust
//! use snag::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .concurrent_transfers(4)
//!     .timeout(Duration::from_secs(20))
//!     .build();
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use snag::fetcher::FetcherBuilder;
//!
//! // Create a fetcher with no visible progress bars
//! let fetcher = FetcherBuilder::hidden().build();
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::{ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;
use std::time::Duration;

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// # fn main()  {
/// use snag::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        builder
    }

    /// Sets the directory where to store the fetched files.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of concurrent transfers.
    pub fn concurrent_transfers(mut self, concurrent_transfers: usize) -> Self {
        self.config.concurrent_transfers = concurrent_transfers;
        self
    }

    /// Bound the connect and total request time for each transfer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Toggle TLS certificate verification.
    ///
    /// Verification is off by default so batches survive self-signed and
    /// misconfigured endpoints; pass `false` to verify certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Set the fetcher style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: FetcherBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use snag::fetcher::FetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = FetcherBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, see also [`headers()`].
    ///
    /// [`headers()`]: FetcherBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
