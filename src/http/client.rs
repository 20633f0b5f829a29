//! HTTP client setup and middleware configuration.
//!
//! This module creates the client used by every fetch. The policy is the
//! one the fetch engine needs: bounded connect/total timeouts, a single
//! attempt (no retry middleware), and TLS certificate verification disabled
//! by default.
//!
//! Disabling verification is a deliberate trade-off, not an oversight: the
//! tool is pointed at arbitrary user-supplied endpoints, some of which sit
//! behind self-signed or misconfigured TLS, and a failed handshake would
//! otherwise be the most common way for a batch to fail. Callers that only
//! talk to well-configured hosts can switch verification back on.
//!
//! # Examples
//!
//! ```rust
//! use snag::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::default();
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Default bound for both the connect and the total request time.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Bound on the total request time.
    pub timeout: Duration,
    /// Bound on connection establishment.
    pub connect_timeout: Duration,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            proxy: None,
            headers: None,
        }
    }
}

/// Creates the HTTP client used for fetches.
///
/// The client carries tracing middleware so requests show up in the crate's
/// trace output; there is no retry middleware, because the fetch policy is
/// one attempt, fail fast.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .danger_accept_invalid_certs(config.accept_invalid_certs);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
