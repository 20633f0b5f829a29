//! Tests for the share server building blocks: port probing, link
//! encoding, and session setup.

use snag::share::{direct_file_link, find_free_port, local_ip, SharePhase, ShareServer, BASE_PORT};
use snag::Error;

use std::net::TcpListener;

mod common;
use common::helpers::*;

#[test]
fn test_find_free_port_moves_past_occupied_base() {
    // Hold an ephemeral port and use it as the probe base; the prober must
    // answer with a later port.
    let held = TcpListener::bind(("0.0.0.0", 0)).unwrap();
    let taken = held.local_addr().unwrap().port();

    let port = find_free_port(taken).unwrap();
    assert!(port > taken);
    assert!(TcpListener::bind(("0.0.0.0", port)).is_ok());
}

#[test]
fn test_find_free_port_default_base() {
    let port = find_free_port(BASE_PORT).unwrap();
    assert!(port >= BASE_PORT);
}

#[test]
fn test_local_ip_never_unspecified() {
    assert!(!local_ip().is_unspecified());
}

#[test]
fn test_direct_file_link_percent_encodes_spaces() {
    let link = direct_file_link("http://192.168.0.10:8000/", "holiday photo.jpg");
    assert_eq!(link, "http://192.168.0.10:8000/holiday%20photo.jpg");
}

#[test]
fn test_direct_file_link_handles_special_characters() {
    let link = direct_file_link("http://192.168.0.10:8000/", "a&b #1.txt");
    assert_eq!(link, "http://192.168.0.10:8000/a%26b%20%231.txt");
}

#[test]
fn test_share_server_requires_existing_directory() {
    let err = ShareServer::new("/no/such/directory/anywhere", None).unwrap_err();
    assert!(matches!(err, Error::MissingDirectory(_)));
}

#[test]
fn test_share_server_starts_idle_with_highlight() {
    let temp_dir = create_temp_dir();
    let server = ShareServer::new(temp_dir.path(), Some("my file.pdf".to_string())).unwrap();

    assert_eq!(server.phase(), SharePhase::Idle);
    assert_eq!(server.highlight(), Some("my file.pdf"));
    assert!(server.directory().is_dir());
}
