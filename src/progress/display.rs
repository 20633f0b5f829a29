//! Progress bar display management and coordination.
//!
//! [`ProgressDisplay`] owns the `MultiProgress` for a batch: a main bar
//! counting completed transfers plus one child bar per in-flight transfer.
//! Child bars are inserted at a row derived from the transfer's ordinal, so
//! a transfer always renders in the same place no matter which worker slot
//! picked it up or how its siblings progress.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Arc;

/// Progress display manager that coordinates multiple progress bars.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: Arc<MultiProgress>,
    /// The main progress bar for overall progress.
    main: Arc<ProgressBar>,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display manager for a batch.
    ///
    /// # Arguments
    /// * `style_options` - Style configuration for progress bars
    /// * `total_transfers` - Batch size, used as the main bar's length
    pub fn new(style_options: StyleOptions, total_transfers: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        let main = Arc::new(
            multi.add(
                style_options
                    .main()
                    .clone()
                    .to_progress_bar(total_transfers as u64),
            ),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Get the multi-progress instance for adding child progress bars.
    pub fn multi(&self) -> Arc<MultiProgress> {
        self.multi.clone()
    }

    /// Get the main progress bar.
    pub fn main(&self) -> Arc<ProgressBar> {
        self.main.clone()
    }

    /// Create a child progress bar for one transfer.
    ///
    /// The bar is inserted at the row matching the transfer's ordinal
    /// (offset by one for the main bar), keeping concurrent rows stable.
    ///
    /// # Arguments
    /// * `ordinal` - The transfer's position in the submitted batch
    /// * `size` - Declared total size, 0 when the server omits it
    pub fn create_child_progress(&self, ordinal: usize, size: u64) -> ProgressBar {
        self.multi.insert(
            ordinal + 1,
            self.style_options.child().clone().to_progress_bar(size),
        )
    }

    /// Increment the main progress bar by one.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish the progress display, clearing or keeping bars based on configuration.
    pub fn finish(&self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}
