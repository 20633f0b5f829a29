//! Tests for the transfer data model: filename derivation, archive URL
//! rewriting, and outcome reporting.

use snag::transfer::{derive_filename, render_summary, rewrite_archive_url, Outcome, Status, Transfer};

use reqwest::StatusCode;
use std::path::{Path, PathBuf};

mod common;
use common::helpers::*;

#[test]
fn test_transfer_from_url_string() {
    let transfer = Transfer::try_from(TEST_DOMAIN).unwrap();
    assert_eq!(transfer.filename, "file.zip");
    assert!(!transfer.archive);
}

#[test]
fn test_transfer_rejects_unparseable_url() {
    assert!(Transfer::try_from("definitely not a url").is_err());
}

#[test]
fn test_archive_transfer_rewrites_hosted_git_url() {
    let transfer = Transfer::archive("https://github.com/org/repo").unwrap();

    // Fetches the default-branch archive endpoint, saves under the
    // repository's name.
    assert_eq!(
        transfer.url.as_str(),
        "https://github.com/org/repo/archive/HEAD.zip"
    );
    assert_eq!(transfer.filename, "repo.zip");
    assert!(transfer.archive);
}

#[test]
fn test_archive_transfer_strips_git_suffix() {
    let transfer = Transfer::archive("https://github.com/org/repo.git").unwrap();
    assert_eq!(
        transfer.url.as_str(),
        "https://github.com/org/repo/archive/HEAD.zip"
    );
    assert_eq!(transfer.filename, "repo.zip");
}

#[test]
fn test_archive_transfer_passes_direct_archives_through() {
    let direct = "https://github.com/org/repo/archive/refs/tags/v1.0.zip";
    let transfer = Transfer::archive(direct).unwrap();
    assert_eq!(transfer.url.as_str(), direct);
    assert_eq!(transfer.filename, "v1.0.zip");
}

#[test]
fn test_archive_transfer_other_hosts_untouched() {
    let transfer = Transfer::archive("https://gitlab.com/org/repo").unwrap();
    assert_eq!(transfer.url.as_str(), "https://gitlab.com/org/repo");
    assert_eq!(transfer.filename, "repo.zip");
}

#[test]
fn test_derive_filename_archive_mode_is_idempotent() {
    let once = derive_filename("https://github.com/org/repo", true);
    let again = derive_filename(&format!("https://github.com/org/{once}"), true);
    assert_eq!(once, "repo.zip");
    assert_eq!(again, "repo.zip");
}

#[test]
fn test_derive_filename_never_fails() {
    for url in ["", "::nope::", "http://", "https://example.com", "relative/path"] {
        let name = derive_filename(url, false);
        assert!(!name.is_empty());
        assert!(!name.contains('/'));
    }
}

#[test]
fn test_rewrite_is_a_single_special_case() {
    // Only github.com repository pages get rewritten.
    assert_eq!(
        rewrite_archive_url("https://example.com/org/repo"),
        "https://example.com/org/repo"
    );
}

#[test]
fn test_outcome_correlates_by_filename() {
    let transfer = Transfer::try_from(TEST_DOMAIN).unwrap();
    let outcome = Outcome::new(transfer, StatusCode::OK, 42)
        .with_status(Status::Success)
        .with_path(PathBuf::from("/home/user/file.zip"));

    assert_eq!(outcome.transfer().filename, "file.zip");
    assert_eq!(outcome.path(), Some(Path::new("/home/user/file.zip")));
    assert_eq!(outcome.size(), 42);
}

#[test]
fn test_render_summary_reports_every_item() {
    let make = |name: &str| {
        let mut t = Transfer::try_from(TEST_DOMAIN).unwrap();
        t.filename = name.to_string();
        t
    };

    let outcomes = vec![
        Outcome::new(make("a.bin"), StatusCode::OK, 1)
            .with_status(Status::Success)
            .with_path(PathBuf::from("/dest/a.bin")),
        Outcome::new(make("b.bin"), StatusCode::NOT_FOUND, 0).fail("HTTP 404"),
        Outcome::new(make("c.bin"), StatusCode::OK, 1)
            .with_status(Status::Success)
            .with_path(PathBuf::from("/dest/c.bin")),
    ];

    let summary = render_summary(&outcomes, Path::new("/dest"));
    assert!(summary.contains("Saved to: /dest"));
    assert!(summary.contains(" [OK] a.bin"));
    assert!(summary.contains(" [X] b.bin: HTTP 404"));
    assert!(summary.contains(" [OK] c.bin"));
    assert!(summary.contains("3 transfer(s): 2 ok, 1 failed"));
}
