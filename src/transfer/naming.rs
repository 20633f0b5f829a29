//! Filename derivation and archive URL rewriting.
//!
//! Destination filenames are derived from user-supplied URLs. Derivation is
//! deliberately infallible: whatever the input looks like, the caller gets a
//! non-empty name without path separators back.

use reqwest::Url;

/// Extension appended to repository snapshot downloads.
pub const ARCHIVE_EXT: &str = ".zip";

/// Name used when a URL parses but carries no usable path segment.
pub const PLACEHOLDER_EMPTY: &str = "downloaded_file";

/// Name used when a URL cannot be parsed at all.
pub const PLACEHOLDER_UNPARSEABLE: &str = "unknown_file";

/// Derives a destination filename from a URL.
///
/// In archive mode the last path segment is treated as a repository name and
/// the archive extension is appended unless already present, so deriving
/// from an already-suffixed name never double-suffixes. In plain mode the
/// last path segment is percent-decoded and used as-is.
///
/// ```rust
/// use snag::transfer::derive_filename;
///
/// assert_eq!(derive_filename("https://example.com/a/b/file.pdf", false), "file.pdf");
/// assert_eq!(derive_filename("https://github.com/org/repo", true), "repo.zip");
/// assert_eq!(derive_filename("not a url", false), "unknown_file");
/// ```
pub fn derive_filename(url: &str, archive_mode: bool) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return PLACEHOLDER_UNPARSEABLE.to_string(),
    };

    let path = parsed.path().trim_matches('/');
    let last = path.rsplit('/').next().unwrap_or_default();

    if archive_mode {
        let repo = if last.is_empty() { PLACEHOLDER_EMPTY } else { last };
        return if repo.ends_with(ARCHIVE_EXT) {
            repo.to_string()
        } else {
            format!("{repo}{ARCHIVE_EXT}")
        };
    }

    if last.is_empty() {
        return PLACEHOLDER_EMPTY.to_string();
    }

    form_urlencoded::parse(last.as_bytes())
        .map(|(key, val)| [key, val].concat())
        .collect()
}

/// Rewrites a hosted-git repository URL to its default-branch archive
/// download endpoint.
///
/// Only `github.com` URLs lacking an explicit `/archive/` segment are
/// rewritten; a trailing `.git` marker is stripped first. Every other URL is
/// returned unchanged, so callers can apply this unconditionally in archive
/// mode.
pub fn rewrite_archive_url(url: &str) -> String {
    if url.ends_with(ARCHIVE_EXT) {
        return url.to_string();
    }

    let is_github = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h == "github.com" || h.ends_with(".github.com")))
        .unwrap_or(false);
    if !is_github || url.contains("/archive/") {
        return url.to_string();
    }

    let base = url.strip_suffix(".git").unwrap_or(url);
    format!("{}/archive/HEAD{}", base.trim_end_matches('/'), ARCHIVE_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename() {
        assert_eq!(
            derive_filename("https://example.com/dir/report.pdf", false),
            "report.pdf"
        );
    }

    #[test]
    fn test_plain_filename_decodes_percent_escapes() {
        assert_eq!(
            derive_filename("https://example.com/my%20file.txt", false),
            "my file.txt"
        );
    }

    #[test]
    fn test_empty_path_falls_back() {
        assert_eq!(derive_filename("https://example.com", false), PLACEHOLDER_EMPTY);
        assert_eq!(derive_filename("https://example.com/", false), PLACEHOLDER_EMPTY);
    }

    #[test]
    fn test_unparseable_url_falls_back() {
        assert_eq!(derive_filename("::definitely not::", false), PLACEHOLDER_UNPARSEABLE);
        assert_eq!(derive_filename("", true), PLACEHOLDER_UNPARSEABLE);
    }

    #[test]
    fn test_archive_suffix_applied_once() {
        assert_eq!(derive_filename("https://github.com/org/repo", true), "repo.zip");
        assert_eq!(
            derive_filename("https://github.com/org/repo.zip", true),
            "repo.zip"
        );
    }

    #[test]
    fn test_filename_never_contains_separators() {
        for url in [
            "https://example.com/a/b/c/d.bin",
            "https://example.com",
            "garbage",
        ] {
            for archive in [false, true] {
                let name = derive_filename(url, archive);
                assert!(!name.is_empty());
                assert!(!name.contains('/'));
            }
        }
    }

    #[test]
    fn test_rewrite_github_repo() {
        assert_eq!(
            rewrite_archive_url("https://github.com/org/repo"),
            "https://github.com/org/repo/archive/HEAD.zip"
        );
    }

    #[test]
    fn test_rewrite_strips_git_suffix() {
        assert_eq!(
            rewrite_archive_url("https://github.com/org/repo.git"),
            "https://github.com/org/repo/archive/HEAD.zip"
        );
    }

    #[test]
    fn test_rewrite_leaves_archives_alone() {
        let direct = "https://github.com/org/repo/archive/refs/tags/v1.0.zip";
        assert_eq!(rewrite_archive_url(direct), direct);
    }

    #[test]
    fn test_rewrite_leaves_other_hosts_alone() {
        let other = "https://gitlab.com/org/repo";
        assert_eq!(rewrite_archive_url(other), other);
    }
}
