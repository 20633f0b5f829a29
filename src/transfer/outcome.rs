//! Transfer outcome tracking.
//!
//! This module contains the [`Outcome`] struct and [`Status`] enum used to
//! report the result of a single transfer. One outcome is produced per
//! [`Transfer`] and never mutated after its terminal status is attached;
//! failures travel here as data rather than as errors.
//!
//! # Examples
//!
//! ```rust
//! use snag::transfer::{Outcome, Status, Transfer};
//! use reqwest::StatusCode;
//! use std::convert::TryFrom;
//!
//! # fn example() -> Result<(), snag::Error> {
//! let transfer = Transfer::try_from("https://example.com/file.zip")?;
//! let outcome = Outcome::new(transfer, StatusCode::OK, 1024).with_status(Status::Success);
//!
//! match outcome.status() {
//!     Status::Success => println!("saved {}", outcome.transfer().filename),
//!     Status::Fail(msg) => println!("failed: {msg}"),
//!     Status::NotStarted => {}
//! }
//! # Ok(())
//! # }
//! ```

use super::request::Transfer;

use reqwest::StatusCode;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Transfer status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Transfer failed with error message
    Fail(String),
    /// Transfer not yet started
    NotStarted,
    /// Transfer completed successfully
    Success,
}

/// Represents a [`Transfer`] outcome.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The transfer this outcome belongs to.
    transfer: Transfer,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Transfer size in bytes.
    size: u64,
    /// Status.
    status: Status,
    /// Where the file landed, on success.
    path: Option<PathBuf>,
}

impl Outcome {
    /// Create a new [`Transfer`] [`Outcome`].
    pub fn new(transfer: Transfer, statuscode: StatusCode, size: u64) -> Self {
        Self {
            transfer,
            statuscode,
            size,
            status: Status::NotStarted,
            path: None,
        }
    }

    /// Attach a status to a [`Transfer`] [`Outcome`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Attach the final destination path to a successful [`Outcome`].
    pub fn with_path(self, path: PathBuf) -> Self {
        Self {
            path: Some(path),
            ..self
        }
    }

    /// Mark the outcome as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{msg}")),
            ..self
        }
    }

    /// Get the outcome's HTTP status code.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the outcome's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the outcome's transfer.
    pub fn transfer(&self) -> &Transfer {
        &self.transfer
    }

    /// Get a reference to the outcome's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Get the saved path, if the transfer succeeded.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the transfer reached a successful terminal state.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Renders the aggregate summary of a batch.
///
/// Outcomes arrive in completion order; the per-item lines therefore do not
/// follow submission order, and callers correlate entries by filename.
pub fn render_summary(outcomes: &[Outcome], dest: &Path) -> String {
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();

    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "Saved to: {}", dest.display());
    for outcome in outcomes {
        match outcome.status() {
            Status::Fail(err) => {
                let _ = writeln!(out, " [X] {}: {err}", outcome.transfer().filename);
            }
            _ => {
                let name = outcome
                    .path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| outcome.transfer().filename.clone());
                let _ = writeln!(out, " [OK] {name}");
            }
        }
    }
    let _ = write!(
        out,
        "{} transfer(s): {} ok, {} failed",
        outcomes.len(),
        outcomes.len() - failed,
        failed
    );
    out
}
