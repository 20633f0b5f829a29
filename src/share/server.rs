//! The LAN share server.
//!
//! One share session serves one directory tree: listings as plain HTML,
//! files as streamed bodies. The session binds the first free port at or
//! above [`BASE_PORT`](crate::share::BASE_PORT) on all interfaces and runs
//! until the interrupt signal, then returns control to the caller.
//!
//! Lifecycle: `Idle -> PortBinding -> Serving -> Stopped`, with no
//! transition out of `Stopped`.

use crate::error::{Error, Result};
use crate::share::net;

use axum::body::Body;
use axum::extract::{Path as AxumPath, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write as _;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tracing::debug;

/// Characters escaped in link components; everything except unreserved.
const LINK_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Phases of a share session. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePhase {
    Idle,
    PortBinding,
    Serving,
    Stopped,
}

/// A share session over one directory.
#[derive(Debug)]
pub struct ShareServer {
    directory: PathBuf,
    highlight: Option<String>,
    phase: SharePhase,
}

impl ShareServer {
    /// Creates a session for `directory`, optionally highlighting one file
    /// whose direct link is printed alongside the folder link.
    ///
    /// Fails fast with [`Error::MissingDirectory`] when the directory does
    /// not exist.
    pub fn new(directory: impl Into<PathBuf>, highlight: Option<String>) -> Result<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(Error::MissingDirectory(directory));
        }
        // Canonical root doubles as the traversal guard for every request.
        let directory = directory.canonicalize()?;
        Ok(Self {
            directory,
            highlight,
            phase: SharePhase::Idle,
        })
    }

    /// Gets the served directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Gets the highlighted filename, if any.
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    /// Gets the session phase.
    pub fn phase(&self) -> SharePhase {
        self.phase
    }

    /// Serves the directory until the process is interrupted.
    pub async fn serve(&mut self) -> Result<()> {
        if self.phase == SharePhase::Stopped {
            return Err(Error::Internal("share session already stopped".to_string()));
        }

        self.phase = SharePhase::PortBinding;
        let ip = net::local_ip();
        let port = net::find_free_port(net::BASE_PORT)
            .ok_or_else(|| Error::Internal("no free TCP port available".to_string()))?;

        self.print_banner(ip, port);

        let app = router(self.directory.clone());
        let listener = tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
        debug!("Share server bound on port {port}");

        self.phase = SharePhase::Serving;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;

        println!("\nStopping server...");
        self.phase = SharePhase::Stopped;
        Ok(())
    }

    fn print_banner(&self, ip: IpAddr, port: u16) {
        let rule = "=".repeat(40);
        println!("\n{rule}");
        println!(" SHARED SERVER STARTED");
        println!("{rule}");
        println!(" Root Folder: {}", self.directory.display());

        let base_link = format!("http://{ip}:{port}/");
        println!(" Folder Link: {base_link}");

        if let Some(name) = &self.highlight {
            println!(" Direct File: {}", direct_file_link(&base_link, name));
        }

        println!(" Press CTRL+C to stop sharing.");
        println!("{rule}\n");
    }
}

/// Builds a clickable direct link for one file under the folder link,
/// percent-encoding the filename so spaces and special characters survive.
pub fn direct_file_link(base_link: &str, filename: &str) -> String {
    format!("{base_link}{}", utf8_percent_encode(filename, LINK_ENCODE_SET))
}

#[derive(Clone)]
struct ShareState {
    root: Arc<PathBuf>,
}

// The handlers deliberately log nothing per request.
fn router(root: PathBuf) -> Router {
    Router::new()
        .route("/", get(list_root))
        .route("/*path", get(serve_path))
        .with_state(ShareState {
            root: Arc::new(root),
        })
}

async fn list_root(State(state): State<ShareState>) -> std::result::Result<Response, StatusCode> {
    render_directory(&state.root, Path::new("")).await
}

async fn serve_path(
    State(state): State<ShareState>,
    AxumPath(path): AxumPath<String>,
) -> std::result::Result<Response, StatusCode> {
    let target = resolve_target(&state.root, &path)?;
    let meta = tokio::fs::metadata(&target)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    if meta.is_dir() {
        render_directory(&state.root, Path::new(path.trim_matches('/'))).await
    } else {
        stream_file(&target).await
    }
}

/// Resolves a request path under the canonical root, refusing anything that
/// escapes it.
fn resolve_target(root: &Path, rel: &str) -> std::result::Result<PathBuf, StatusCode> {
    let rel = rel.trim_matches('/');
    if rel.is_empty() {
        return Ok(root.to_path_buf());
    }

    let candidate = root.join(rel);
    let canon = candidate.canonicalize().map_err(|_| StatusCode::NOT_FOUND)?;
    if !canon.starts_with(root) {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(canon)
}

async fn render_directory(
    root: &Path,
    rel: &Path,
) -> std::result::Result<Response, StatusCode> {
    let dir = root.join(rel);
    let mut read_dir = tokio::fs::read_dir(&dir)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    let mut entries: Vec<(String, bool)> = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        entries.push((name, is_dir));
    }
    entries.sort();

    let location = format!("/{}", rel.display());
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Index of {0}</title></head>\
         <body><h1>Index of {0}</h1><ul>",
        escape_html(&location)
    );
    for (name, is_dir) in &entries {
        let suffix = if *is_dir { "/" } else { "" };
        let _ = write!(
            html,
            "<li><a href=\"{}\">{}{suffix}</a></li>",
            href_for(rel, name),
            escape_html(name)
        );
    }
    html.push_str("</ul></body></html>");

    Ok(Html(html).into_response())
}

async fn stream_file(path: &Path) -> std::result::Result<Response, StatusCode> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;
    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    let mut resp = Response::new(body);
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(guess_mime(path)),
    );
    Ok(resp)
}

/// Builds the href for a listing entry, percent-encoding every segment.
fn href_for(rel: &Path, name: &str) -> String {
    let mut href = String::from("/");
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let _ = write!(
                href,
                "{}/",
                utf8_percent_encode(&part.to_string_lossy(), LINK_ENCODE_SET)
            );
        }
    }
    let _ = write!(href, "{}", utf8_percent_encode(name, LINK_ENCODE_SET));
    href
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "txt" | "md" | "log" => "text/plain; charset=utf-8",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_file_link_encodes_spaces() {
        let link = direct_file_link("http://192.168.1.2:8000/", "my file.pdf");
        assert_eq!(link, "http://192.168.1.2:8000/my%20file.pdf");
    }

    #[test]
    fn test_direct_file_link_leaves_unreserved_alone() {
        let link = direct_file_link("http://10.0.0.1:8001/", "archive-v1.2_final.zip");
        assert_eq!(link, "http://10.0.0.1:8001/archive-v1.2_final.zip");
    }

    #[test]
    fn test_href_encodes_every_segment() {
        assert_eq!(
            href_for(Path::new("sub dir"), "a file.txt"),
            "/sub%20dir/a%20file.txt"
        );
        assert_eq!(href_for(Path::new(""), "plain.bin"), "/plain.bin");
    }

    #[test]
    fn test_resolve_target_rejects_escapes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        std::fs::write(root.join("inside.txt"), b"ok").unwrap();

        assert!(resolve_target(&root, "inside.txt").is_ok());
        // Escaping the root resolves outside it (or not at all): refused.
        assert!(resolve_target(&root, "../outside.txt").is_err());
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("a.txt")), "text/plain; charset=utf-8");
        assert_eq!(guess_mime(Path::new("a.ZIP")), "application/zip");
        assert_eq!(guess_mime(Path::new("a")), "application/octet-stream");
    }

    #[test]
    fn test_new_rejects_missing_directory() {
        let err = ShareServer::new("/definitely/not/here", None).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory(_)));
    }

    #[test]
    fn test_new_session_starts_idle() {
        let dir = tempfile::tempdir().unwrap();
        let server = ShareServer::new(dir.path(), None).unwrap();
        assert_eq!(server.phase(), SharePhase::Idle);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}
