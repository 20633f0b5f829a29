//! Fetcher module containing the concurrent download coordinator.
//!
//! This module provides the main [`Fetcher`] struct and its associated
//! builder pattern. The fetcher runs a bounded pool of single-transfer
//! fetches over a batch of [`Transfer`]s, collects completion-ordered
//! [`Outcome`]s, and cooperates with the active-transfer registry so a
//! user interrupt cleans up every partially written file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use snag::fetcher::FetcherBuilder;
//! use snag::transfer::Transfer;
//! use std::convert::TryFrom;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), snag::Error> {
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .build();
//!
//! let transfers = vec![
//!     Transfer::try_from("https://example.com/file1.zip")?.with_ordinal(0),
//!     Transfer::try_from("https://example.com/file2.pdf")?.with_ordinal(1),
//! ];
//!
//! for outcome in fetcher.run(&transfers).await? {
//!     println!("{}: {:?}", outcome.transfer().filename, outcome.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Transfer`]: crate::transfer::Transfer
//! [`Outcome`]: crate::transfer::Outcome

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::{FetcherConfig, DEFAULT_CONCURRENT_TRANSFERS};
pub use fetcher::Fetcher;
