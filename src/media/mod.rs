//! Media fetch capability.
//!
//! Streaming-media extraction is not handled in-process: it is delegated to
//! an external downloader binary behind the [`MediaFetch`] trait, so tests
//! and alternative tools can substitute their own implementation.
//!
//! The concrete variant, [`YtDlp`], is located on the search path up front
//! ([`YtDlp::locate`]) so a missing binary surfaces as a structured
//! pre-flight error instead of a deferred spawn failure.

use crate::error::{Error, Result};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// A capability that fetches a media link into a destination directory.
#[async_trait]
pub trait MediaFetch {
    /// Fetches `link` into `dest_dir`. Implementations are single-attempt:
    /// a failed fetch is reported, never retried.
    async fn fetch(&self, link: &str, dest_dir: &Path) -> Result<()>;
}

/// Media fetcher backed by the external `yt-dlp` binary.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
}

impl YtDlp {
    /// Name of the external downloader binary.
    pub const BINARY: &'static str = "yt-dlp";

    /// Locates the downloader on the search path.
    ///
    /// This is the pre-flight check run before dispatching a media command;
    /// a missing binary aborts the invocation with [`Error::MissingTool`].
    pub async fn locate() -> Result<Self> {
        let output = Command::new("which").arg(Self::BINARY).output().await?;
        if !output.status.success() {
            return Err(Error::MissingTool(Self::BINARY.to_string()));
        }

        let binary = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        debug!("Located {} at {:?}", Self::BINARY, binary);
        Ok(Self { binary })
    }

    /// Creates a fetcher around an explicit binary path, bypassing the
    /// search-path probe.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Gets the resolved binary path.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

#[async_trait]
impl MediaFetch for YtDlp {
    async fn fetch(&self, link: &str, dest_dir: &Path) -> Result<()> {
        debug!("Invoking {:?} -P {:?} {}", self.binary, dest_dir, link);
        let status = Command::new(&self.binary)
            .arg("-P")
            .arg(dest_dir)
            .arg(link)
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::ToolFailure(format!(
                "{} exited with {status}",
                Self::BINARY
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockMedia {
        calls: Arc<AtomicUsize>,
        succeed: bool,
    }

    #[async_trait]
    impl MediaFetch for MockMedia {
        async fn fetch(&self, _link: &str, _dest_dir: &Path) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(())
            } else {
                Err(Error::ToolFailure("mock exited with 1".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn test_mock_media_fetch_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let media = MockMedia {
            calls: calls.clone(),
            succeed: true,
        };

        media
            .fetch("https://example.com/watch?v=1", Path::new("/tmp"))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mock_media_fetch_failure_is_tool_failure() {
        let media = MockMedia {
            calls: Arc::new(AtomicUsize::new(0)),
            succeed: false,
        };

        let err = media
            .fetch("https://example.com/watch?v=1", Path::new("/tmp"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolFailure(_)));
    }

    #[test]
    fn test_with_binary_keeps_path() {
        let media = YtDlp::with_binary("/opt/yt-dlp");
        assert_eq!(media.binary(), Path::new("/opt/yt-dlp"));
    }

    #[tokio::test]
    async fn test_fetch_with_false_binary_fails() {
        // `false` exists everywhere and always exits non-zero.
        let media = YtDlp::with_binary("/bin/false");
        let err = media
            .fetch("https://example.com/v", Path::new("/tmp"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolFailure(_)));
    }
}
