//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing configuration documents to temporary site
//! directories and for serving one canned HTTP response.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Configuration document exercising every field.
pub const FULL_PROFILE: &str = r##"{
  "bgColor": "#101010",
  "cardColor": "#202020",
  "textColor": "#fafafa",
  "accentColor": "#ff8800",
  "title": "Jane's Bakery",
  "subtitle": "Fresh bread daily",
  "logo": "https://cdn.example/logo.png",
  "links": [
    { "url": "https://shop.example", "image": "shop.png", "iconName": "store", "title": "Shop" },
    { "url": "https://maps.example/1", "iconName": "map-pin", "name": "Downtown", "phone": "+1 234 567", "address": "123 Main" },
    { "number": "★", "address": "42 Side St" },
    { "description": "Coming soon" }
  ],
  "socials": [
    { "url": "https://instagram.com/jane", "icon": "ig.svg", "platform": "Instagram" },
    { "url": "https://x.com/jane", "platform": "X" },
    { "url": "https://example.com" }
  ]
}"##;

/// Creates a temporary site directory containing `data.json`.
///
/// # Arguments
///
/// * `document`: Configuration document text
///
/// # Returns
///
/// Temporary directory and path to the written document
///
/// # Errors
///
/// Returns error if the directory or file cannot be created
pub fn create_site(document: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("data.json");
    fs::write(&path, document)?;
    Ok((dir, path))
}

/// Serves a single HTTP response on a local port.
///
/// The returned handle yields the raw request text once the response has
/// been written.
///
/// # Arguments
///
/// * `status_line`: Status line such as `200 OK`
/// * `body`: Response body
///
/// # Returns
///
/// Base URL of the server and handle to the serving thread
///
/// # Errors
///
/// Returns error if no local port can be bound
pub fn serve_once(status_line: &str, body: &str) -> Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let base = format!("http://{}/", listener.local_addr()?);
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return String::new();
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while let Ok(n) = stream.read(&mut buf) {
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
        String::from_utf8_lossy(&request).into_owned()
    });

    Ok((base, handle))
}
