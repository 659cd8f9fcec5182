// Shared fixtures and helpers for integration tests.
#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use tempfile::TempDir;

use i18n_harvester::HarvestOptions;

/// A port nothing listens on; connection attempts fail immediately, which
/// exercises the local-fallback path without touching the network.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/api/translations";

/// Minimal page from the default-language scenario: one heading, one input.
pub fn scenario_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>Scenario</title></head>
<body>
<h1>Hello</h1>
<input placeholder="Name">
</body>
</html>"#
        .to_string()
}

/// Page with a bit of everything the extractor is supposed to match and skip.
pub fn mixed_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>Mixed</title></head>
<body>
<h1>Welcome</h1>
<p>Intro paragraph</p>
<p>Text with <strong>nested</strong> markup</p>
<span>   </span>
<label>Email</label>
<input type="email" placeholder="Enter your email">
<textarea placeholder="Your message"></textarea>
<div>Plain div text is not extracted</div>
<button>Save</button>
</body>
</html>"#
        .to_string()
}

/// Scratch working directory holding the document and the lookup directory.
pub struct Workspace {
    pub dir: TempDir,
    pub options: HarvestOptions,
}

impl Workspace {
    /// Creates a workspace with the given document content and options wired
    /// to it, pointing the sync client at an unreachable endpoint.
    pub fn with_document(html: &str) -> Workspace {
        let dir = TempDir::new().expect("unable to create temp dir");
        let document_path = dir.path().join("input.html");
        fs::write(&document_path, html).expect("unable to write test document");

        let options = HarvestOptions {
            document_path,
            lookup_dir: dir.path().join("translations"),
            endpoint: UNREACHABLE_ENDPOINT.to_string(),
            ..HarvestOptions::default()
        };

        Workspace { dir, options }
    }

    pub fn document_text(&self) -> String {
        read_to_string(&self.options.document_path)
    }

    pub fn lookup_text(&self, language_code: &str) -> String {
        read_to_string(
            &self
                .options
                .lookup_dir
                .join(format!("_{}.js", language_code)),
        )
    }
}

pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("unable to read {:?}: {}", path, err))
}

/// Serves exactly one HTTP request with a canned 200 JSON response, on an
/// ephemeral port. Returns the endpoint URL to point the sync client at.
///
/// The request is consumed in full (headers plus Content-Length body) before
/// responding, so the client never sees a reset mid-write.
pub fn serve_one_response(response_body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("unable to bind test listener");
    let addr = listener.local_addr().expect("unable to read listener addr");

    thread::spawn(move || {
        let (mut stream, _) = match listener.accept() {
            Ok(connection) => connection,
            Err(_) => return,
        };

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        let headers_end = loop {
            let n = match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            request.extend_from_slice(&chunk[..n]);
            if let Some(pos) = request.windows(4).position(|window| window == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&request[..headers_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let mut body_read = request.len() - headers_end;
        while body_read < content_length {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => body_read += n,
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response_body.len(),
            response_body
        );
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{}/api/translations", addr)
}
