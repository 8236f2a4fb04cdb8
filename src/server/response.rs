//! HTTP response types and serialization.

use crate::parser::HttpVersion;

/// The status codes this server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    NotFound = 404,
    InternalServerError = 500,
}

impl StatusCode {
    /// The status-line text, code and reason phrase together.
    pub fn status_text(&self) -> &'static str {
        match self {
            StatusCode::Ok => "200 OK",
            StatusCode::Created => "201 CREATED",
            StatusCode::NotFound => "404 NOT FOUND",
            StatusCode::InternalServerError => "500 INTERNAL SERVER ERROR",
        }
    }
}

/// Represents an HTTP response.
///
/// A response with no content type carries no body framing at all: the wire
/// form is the status line followed by the blank separator, nothing else.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP version echoed in the status line
    pub version: HttpVersion,
    /// The content type; `None` means no body framing
    pub content_type: Option<String>,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: HttpVersion::Http11,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Set the HTTP version echoed in the status line.
    pub fn with_version(mut self, version: HttpVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the response body with a string.
    pub fn with_body_string(self, body: impl Into<String>) -> Self {
        self.with_body_bytes(body.into().into_bytes())
    }

    /// Convert the response to bytes.
    ///
    /// `Content-Length` is computed from the body buffer itself, so the
    /// declared length always matches the body byte-for-byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Status line
        let status_line = format!("{} {}\r\n", self.version, self.status.status_text());
        bytes.extend_from_slice(status_line.as_bytes());

        match &self.content_type {
            Some(content_type) => {
                bytes.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
                bytes.extend_from_slice(
                    format!("Content-Length: {len}\r\n", len = self.body.len()).as_bytes(),
                );
                bytes.extend_from_slice(b"\r\n");
                bytes.extend_from_slice(&self.body);
            }
            None => {
                // No content type: status line and the blank separator only
                bytes.extend_from_slice(b"\r\n");
            }
        }

        bytes
    }
}
