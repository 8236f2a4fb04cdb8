//! A minimal HTTP/1.1 server core.
//!
//! This library reads raw byte streams over TCP, parses them into structured
//! requests, dispatches to a small fixed set of route handlers, and
//! serializes the results back into wire-format responses. Each accepted
//! connection serves exactly one request-response cycle and is then closed.
//!
//! # Features
//!
//! - Incremental HTTP request parsing from any async byte stream
//! - GET and POST over a fixed route set: root probe, `/echo/`,
//!   `/user-agent`, and `/files/` backed by a configured directory
//! - Exact response framing: `Content-Length` is always the byte length of
//!   the body buffer
//! - Proper error handling with descriptive error messages
//! - One spawned task per connection, graceful Ctrl+C shutdown
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use nanohttp_rs::{read_request, WireReader};
//!
//! # async fn demo() -> Result<(), nanohttp_rs::ParserError> {
//! let raw: &[u8] = b"GET /echo/hi HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! let mut reader = WireReader::new(raw);
//! let request = read_request(&mut reader).await?;
//!
//! println!("Method: {}", request.method);
//! println!("Path: {}", request.path);
//! println!("Version: {}", request.version);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a response
//!
//! ```
//! use nanohttp_rs::{HttpResponse, StatusCode};
//!
//! let response = HttpResponse::new(StatusCode::Ok)
//!     .with_content_type("text/plain")
//!     .with_body_string("hello");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! assert!(bytes.ends_with(b"Content-Length: 5\r\n\r\nhello"));
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use nanohttp_rs::{HttpServer, ServerConfig};
//!
//! # async fn demo() -> Result<(), nanohttp_rs::ServerError> {
//! let config = ServerConfig {
//!     addr: "0.0.0.0:4221".parse().unwrap(),
//!     files_dir: "/tmp/files".into(),
//! };
//!
//! let server = HttpServer::new(config);
//! server.start().await?;
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, WireReader, read_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, Router, ServerConfig, StatusCode};
