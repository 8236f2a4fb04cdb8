//! HTTP parser module.
//!
//! This module reads HTTP/1.1 requests incrementally from a byte stream:
//! the wire reader provides line- and length-delimited reads over a shared
//! buffer, and [`read_request`] assembles them into an [`HttpRequest`].

mod error;
mod method;
mod reader;
mod request;
mod version;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use reader::WireReader;
pub use request::HttpRequest;
pub use version::HttpVersion;

// Re-export the read_request function
pub use request::read_request;
