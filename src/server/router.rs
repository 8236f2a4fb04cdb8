//! Route dispatch for the fixed endpoint set.

use std::path::PathBuf;

use log::{debug, error};
use tokio::fs;

use crate::parser::{HttpRequest, Method};
use crate::server::response::{HttpResponse, StatusCode};

const TEXT_PLAIN: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

/// Maps a parsed request to a response.
///
/// Dispatch is deterministic, first-match-wins over a fixed rule list. Path
/// matching is case-sensitive and operates on the raw request target; no
/// percent-decoding is applied, and file names are taken from the path
/// remainder as-is.
pub struct Router {
    files_dir: PathBuf,
}

impl Router {
    /// Create a router serving the `/files/` routes out of `files_dir`.
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            files_dir: files_dir.into(),
        }
    }

    /// Dispatch a request to its handler and return the response, with the
    /// request's HTTP version applied for the status line.
    pub async fn route(&self, request: &HttpRequest) -> HttpResponse {
        let response = if request.path == "/" {
            HttpResponse::new(StatusCode::Ok)
        } else if let Some(rest) = request.path.strip_prefix(ECHO_PREFIX) {
            HttpResponse::new(StatusCode::Ok)
                .with_content_type(TEXT_PLAIN)
                .with_body_string(rest)
        } else if request.path == "/user-agent" {
            let agent = request.header("User-Agent").unwrap_or_default();
            HttpResponse::new(StatusCode::Ok)
                .with_content_type(TEXT_PLAIN)
                .with_body_string(agent)
        } else if let Some(name) = request.path.strip_prefix(FILES_PREFIX) {
            match request.method {
                Method::GET => self.read_file(name).await,
                Method::POST => self.write_file(name, &request.body).await,
            }
        } else {
            HttpResponse::new(StatusCode::NotFound)
        };

        response.with_version(request.version)
    }

    async fn read_file(&self, name: &str) -> HttpResponse {
        match fs::read(self.files_dir.join(name)).await {
            Ok(contents) => HttpResponse::new(StatusCode::Ok)
                .with_content_type(OCTET_STREAM)
                .with_body_bytes(contents),
            Err(e) => {
                debug!("File read failed for {name}: {e}");
                HttpResponse::new(StatusCode::NotFound)
            }
        }
    }

    async fn write_file(&self, name: &str, body: &[u8]) -> HttpResponse {
        match fs::write(self.files_dir.join(name), body).await {
            Ok(()) => HttpResponse::new(StatusCode::Created),
            Err(e) => {
                error!("File write failed for {name}: {e}");
                HttpResponse::new(StatusCode::InternalServerError)
            }
        }
    }
}
