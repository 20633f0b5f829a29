//! HTTP module containing HTTP client functionality.
//!
//! This module provides HTTP client setup for the fetch engine: timeout
//! policy, TLS verification toggling, optional proxy and default headers,
//! and tracing middleware.

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
