//! Snag fetches remote files concurrently and can share a local folder
//! over plain HTTP with the LAN.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use snag::{fetcher::FetcherBuilder, transfer::Transfer, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let transfers = vec![
//!     Transfer::try_from("https://example.com/report.pdf")?.with_ordinal(0),
//!     Transfer::archive("https://github.com/org/repo")?.with_ordinal(1),
//! ];
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .build();
//! let outcomes = fetcher.run(&transfers).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`transfer`] - Transfer requests, filename derivation, and outcomes
//! - [`fetcher`] - The concurrent download coordinator and its builder
//! - [`registry`] - The shared set of in-flight destination paths
//! - [`share`] - The LAN share server
//! - [`media`] - The external media-downloader capability
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display management

pub mod error;
pub mod fetcher;
pub mod http;
pub mod media;
pub mod progress;
pub mod registry;
pub mod share;
pub mod transfer;

pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder, DEFAULT_CONCURRENT_TRANSFERS};
pub use http::{create_http_client, HttpClientConfig};
pub use media::{MediaFetch, YtDlp};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use registry::ActiveTransfers;
pub use share::{ShareServer, SharePhase};
pub use transfer::{render_summary, Outcome, Status, Transfer};
