//! The transfer request.
//!
//! A [`Transfer`] is created per URL at batch-submission time and consumed
//! by exactly one fetch. The ordinal places the transfer's progress row on
//! screen; it never influences result ordering.

use crate::error::Error;
use crate::transfer::naming::{derive_filename, rewrite_archive_url};

use reqwest::Url;
use std::convert::TryFrom;

/// Represents a file to be fetched.
#[derive(Debug, Clone)]
pub struct Transfer {
    /// URL of the file to fetch.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
    /// Position of this transfer's progress row.
    pub ordinal: usize,
    /// Whether the target is a repository snapshot rather than a plain file.
    pub archive: bool,
}

impl Transfer {
    /// Creates a new [`Transfer`] with an explicit filename.
    ///
    /// When using the [`Transfer::try_from`] constructors, the file name is
    /// derived from the URL instead.
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
            ordinal: 0,
            archive: false,
        }
    }

    /// Creates a [`Transfer`] in archive mode.
    ///
    /// The filename is derived from the repository name in the URL as given,
    /// then the URL is rewritten to the default-branch archive endpoint when
    /// it points at a hosted-git repository page:
    ///
    /// ```rust
    /// use snag::transfer::Transfer;
    ///
    /// let t = Transfer::archive("https://github.com/org/repo")?;
    /// assert_eq!(t.filename, "repo.zip");
    /// assert_eq!(t.url.as_str(), "https://github.com/org/repo/archive/HEAD.zip");
    /// # Ok::<(), snag::Error>(())
    /// ```
    pub fn archive(url: &str) -> Result<Self, Error> {
        let filename = derive_filename(url, true);
        let rewritten = rewrite_archive_url(url);
        let url = Url::parse(&rewritten)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{rewritten}\" cannot be parsed: {e}")))?;
        Ok(Self {
            url,
            filename,
            ordinal: 0,
            archive: true,
        })
    }

    /// Sets the ordinal used to place this transfer's progress row.
    pub fn with_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = ordinal;
        self
    }
}

impl TryFrom<&Url> for Transfer {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        Ok(Transfer {
            url: value.clone(),
            filename: derive_filename(value.as_str(), false),
            ordinal: 0,
            archive: false,
        })
    }
}

impl TryFrom<&str> for Transfer {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{value}\" cannot be parsed: {e}")))
            .and_then(|u| Transfer::try_from(&u))
    }
}
