//! Core fetcher implementation with the concurrent transfer logic.
//!
//! This module contains the main [`Fetcher`] struct. A batch of transfers
//! runs through a bounded worker pool; each transfer streams its body to
//! disk, keeps the active-transfer registry current, and reports its result
//! as an [`Outcome`] rather than an error, so one failure never aborts its
//! siblings. A user interrupt mid-batch is handled by the fetcher itself:
//! it purges the registry and unwinds with [`Error::Interrupted`].
//!
//! [`Outcome`]: crate::transfer::Outcome

use super::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::display::ProgressDisplay;
use crate::registry::ActiveTransfers;
use crate::transfer::{Outcome, Status, Transfer};

use futures::stream::{self, StreamExt};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// Represents the transfer controller.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use snag::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// # }
/// ```
pub struct Fetcher {
    config: FetcherConfig,
    registry: ActiveTransfers,
}

impl Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self {
            config,
            registry: ActiveTransfers::new(),
        }
    }

    /// Gets the directory where files will be saved.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of concurrent transfers.
    pub fn concurrent_transfers(&self) -> usize {
        self.config.concurrent_transfers
    }

    /// Gets the per-transfer timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets whether TLS certificate verification is skipped.
    pub fn accept_invalid_certs(&self) -> bool {
        self.config.accept_invalid_certs
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets a handle on the active-transfer registry.
    pub fn registry(&self) -> ActiveTransfers {
        self.registry.clone()
    }

    /// Runs the batch through the bounded worker pool.
    ///
    /// Returns one [`Outcome`] per transfer, in completion order: callers
    /// correlate results to inputs by filename, not by index. The batch
    /// races the interrupt signal; on ctrl-c every registered partial file
    /// is deleted (each deletion reported) and the call unwinds with
    /// [`Error::Interrupted`] so the process can exit cleanly.
    pub async fn run(&self, transfers: &[Transfer]) -> Result<Vec<Outcome>> {
        let client = create_http_client(HttpClientConfig {
            timeout: self.config.timeout,
            connect_timeout: self.config.timeout,
            accept_invalid_certs: self.config.accept_invalid_certs,
            proxy: None,
            headers: self.config.headers.clone(),
        })?;

        // Prepare the progress display.
        let progress_display =
            ProgressDisplay::new(self.config.style_options.clone(), transfers.len());

        // Fetch the files asynchronously.
        let batch = stream::iter(transfers)
            .map(|t| self.fetch_one(&client, t, &progress_display))
            .buffer_unordered(self.config.concurrent_transfers)
            .collect::<Vec<_>>();
        tokio::pin!(batch);

        tokio::select! {
            outcomes = &mut batch => {
                progress_display.finish();
                Ok(outcomes)
            }
            _ = Self::wait_for_interrupt() => {
                // In-flight requests are abandoned when the batch future is
                // dropped; sockets are simply closed, not drained.
                println!("\n\n[!] Cancellation detected (Ctrl+C).");
                println!("Cleaning up temporary files...");
                for path in self.registry.purge() {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    println!(" - Deleted incomplete: {name}");
                }
                Err(Error::Interrupted)
            }
        }
    }

    /// Fetches one file and writes it to disk.
    async fn fetch_one(
        &self,
        client: &ClientWithMiddleware,
        transfer: &Transfer,
        progress_display: &ProgressDisplay,
    ) -> Outcome {
        let output = self.config.directory.join(&transfer.filename);

        // Track the destination before the first byte can hit the disk.
        self.registry.register(&output);

        debug!("Fetching {}", &transfer.url);
        let res = match client.get(transfer.url.as_str()).send().await {
            Ok(res) => res,
            Err(e) => {
                self.discard_partial(&output).await;
                return Outcome::new(transfer.clone(), StatusCode::BAD_REQUEST, 0).fail(e);
            }
        };

        // Check the status for errors.
        let status = res.status();
        if let Err(e) = res.error_for_status_ref() {
            self.discard_partial(&output).await;
            return Outcome::new(transfer.clone(), status, 0).fail(e);
        }

        // 0 when the server omits content-length.
        let size = res.content_length().unwrap_or(0);
        let outcome = Outcome::new(transfer.clone(), status, size);

        // The progress row is keyed by the transfer's ordinal.
        let pb = progress_display.create_child_progress(transfer.ordinal, size);

        // Prepare the destination directory/file.
        let output_dir = output.parent().unwrap_or(&output);
        debug!("Creating destination directory {:?}", output_dir);
        if let Err(e) = fs::create_dir_all(output_dir).await {
            self.discard_partial(&output).await;
            return outcome.fail(e);
        }

        debug!("Creating destination file {:?}", &output);
        let mut file = match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&output)
            .await
        {
            Ok(file) => file,
            Err(e) => {
                self.discard_partial(&output).await;
                return outcome.fail(e);
            }
        };

        let mut final_size: u64 = 0;

        // Stream the body to disk chunk by chunk.
        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    drop(file);
                    self.discard_partial(&output).await;
                    return outcome.fail(e);
                }
            };
            let chunk_size = chunk.len() as u64;
            final_size += chunk_size;
            pb.inc(chunk_size);

            if let Err(e) = file.write_all_buf(&mut chunk).await {
                drop(file);
                self.discard_partial(&output).await;
                return outcome.fail(e);
            }
        }

        if let Err(e) = file.flush().await {
            drop(file);
            self.discard_partial(&output).await;
            return outcome.fail(e);
        }
        drop(file);

        // Finish the progress row and advance the main bar.
        progress_display.finish_child(pb);
        progress_display.increment_main();

        // Terminal state: the registry entry is dropped.
        self.registry.deregister(&output);

        Outcome::new(transfer.clone(), status, final_size)
            .with_status(Status::Success)
            .with_path(output)
    }

    /// Resolves when the user interrupts the process. If the signal cannot
    /// be registered, the batch must still run, so this never resolves.
    async fn wait_for_interrupt() {
        if tokio::signal::ctrl_c().await.is_err() {
            futures::future::pending::<()>().await;
        }
    }

    /// Deletes whatever was written for a failed transfer, then drops the
    /// registry entry. Delete-before-deregister: a purge racing this path
    /// can at worst see a registered-but-missing file, which it skips.
    async fn discard_partial(&self, output: &Path) {
        if fs::metadata(output).await.is_ok() {
            if let Err(e) = fs::remove_file(output).await {
                debug!("Failed to remove partial file {:?}: {}", output, e);
            }
        }
        self.registry.deregister(output);
    }
}
