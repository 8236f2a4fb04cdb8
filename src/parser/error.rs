//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while reading and parsing an HTTP request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not split into method, path and version.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The HTTP method in the request is not supported.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The HTTP version in the request is not supported.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A header line has no `": "` separator or is not valid UTF-8.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The Content-Length header is not a non-negative integer.
    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// The stream ended before a complete request head was read.
    #[error("Connection closed before a complete request was received")]
    IncompleteRequest,

    /// The stream ended before the announced body length was read.
    #[error("Body truncated: expected {expected} bytes, read {read}")]
    TruncatedBody { expected: usize, read: usize },

    /// I/O error on the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
