use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;

// Common test constants
pub const TEST_DOMAIN: &str = "http://domain.com/file.zip";
pub const SMALL_PAYLOAD: usize = 1024;
pub const LARGE_PAYLOAD: usize = 64 * 1024;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = std::fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

/// Spawns a loopback HTTP server used by batch tests, so nothing touches
/// the network. Routes:
///
/// - `/one.bin` - SMALL_PAYLOAD bytes
/// - `/two.bin` - LARGE_PAYLOAD bytes
/// - `/missing.bin` - always 404
pub async fn spawn_test_server() -> SocketAddr {
    let app = Router::new()
        .route("/one.bin", get(|| async { create_test_content(SMALL_PAYLOAD) }))
        .route("/two.bin", get(|| async { create_test_content(LARGE_PAYLOAD) }))
        .route("/missing.bin", get(|| async { StatusCode::NOT_FOUND }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read test server addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server died");
    });

    addr
}

/// Builds a URL pointing at the test server
pub fn server_url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}
