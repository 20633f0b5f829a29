//! Transfer module containing the transfer data model.
//!
//! This module provides the structures consumed and produced by the fetch
//! engine: the immutable [`Transfer`] request, the [`Outcome`] produced for
//! each request, and the filename derivation rules applied to user-supplied
//! URLs.
//!
//! # Overview
//!
//! The transfer module is organized into three main components:
//!
//! - [`request`] - Core Transfer struct and URL handling
//! - [`naming`] - Filename derivation and archive URL rewriting
//! - [`outcome`] - Transfer result tracking and summary rendering
//!
//! # Examples
//!
//! ## Creating a Transfer
//!
//! ```rust
//! use snag::transfer::Transfer;
//! use std::convert::TryFrom;
//!
//! let transfer = Transfer::try_from("https://example.com/file.zip")?;
//! println!("Fetching: {}", transfer.filename);
//! # Ok::<(), snag::Error>(())
//! ```
//!
//! ## Archive mode
//!
//! ```rust
//! use snag::transfer::Transfer;
//!
//! // A hosted-git URL is rewritten to its default-branch archive endpoint,
//! // while the filename stays derived from the repository name.
//! let transfer = Transfer::archive("https://github.com/org/repo")?;
//! assert_eq!(transfer.filename, "repo.zip");
//! # Ok::<(), snag::Error>(())
//! ```

pub mod naming;
pub mod outcome;
pub mod request;

pub use naming::{derive_filename, rewrite_archive_url};
pub use outcome::{render_summary, Outcome, Status};
pub use request::Transfer;
