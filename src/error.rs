//! Error handling for the snag library.
//!
//! Per-transfer failures are not represented here: a failed download is
//! captured as data in a [`crate::transfer::Outcome`] and never aborts its
//! siblings. This enum covers command-level setup errors and the few
//! conditions that must unwind a whole invocation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using snag.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The directory to serve or write into does not exist.
    #[error("Directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A required external tool was not found on the search path.
    #[error("Missing external tool: {0}")]
    MissingTool(String),

    /// An external tool ran but reported failure.
    #[error("External tool failed: {0}")]
    ToolFailure(String),

    /// The user interrupted the batch; partial files were cleaned up.
    #[error("Interrupted")]
    Interrupted,
}

/// Result type alias for operations that can fail with a snag error.
pub type Result<T> = std::result::Result<T, Error>;
