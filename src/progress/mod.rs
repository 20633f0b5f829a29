//! Progress module containing progress bar functionality.
//!
//! Styling lives in `style`; coordination of the main bar and the
//! per-transfer child rows lives in `display`. Child rows are keyed by the
//! transfer's ordinal so concurrent transfers render independently without
//! interleaving.

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
