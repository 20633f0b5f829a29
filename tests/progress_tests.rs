//! Tests for progress bar styling and display coordination.

use snag::progress::{ProgressBarOpts, ProgressDisplay, StyleOptions};

#[test]
fn test_default_style_options_enabled() {
    let style = StyleOptions::default();
    assert!(style.is_enabled());
}

#[test]
fn test_hidden_style_options_disabled() {
    let style = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
    assert!(!style.is_enabled());
}

#[test]
fn test_hidden_opts_produce_hidden_bar() {
    let bar = ProgressBarOpts::hidden().to_progress_bar(100);
    assert!(bar.is_hidden());
}

#[test]
fn test_pip_style_bar_has_length() {
    let bar = ProgressBarOpts::with_pip_style().to_progress_bar(2048);
    assert_eq!(bar.length(), Some(2048));
}

#[test]
fn test_set_clear() {
    let mut opts = ProgressBarOpts::with_pip_style();
    opts.set_clear(false);
    // No direct getter; construction must still work.
    let bar = opts.to_progress_bar(1);
    assert_eq!(bar.length(), Some(1));
}

#[test]
fn test_display_tracks_batch_size() {
    let display = ProgressDisplay::new(StyleOptions::default(), 3);
    assert_eq!(display.main().length(), Some(3));
    display.finish();
}

#[test]
fn test_display_child_rows_by_ordinal() {
    let display = ProgressDisplay::new(
        StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden()),
        2,
    );

    // Out-of-order creation must not panic: rows are keyed by ordinal.
    let second = display.create_child_progress(1, 100);
    let first = display.create_child_progress(0, 200);

    first.inc(50);
    second.inc(100);

    display.finish_child(first);
    display.finish_child(second);
    display.increment_main();
    display.increment_main();
    display.finish();
}
