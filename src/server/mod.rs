//! HTTP server implementation for nanohttp-rs.
//!
//! This module provides a simple HTTP server that serves exactly one
//! request-response cycle per accepted connection, dispatching over a fixed
//! route set.

mod response;
mod config;
mod error;
mod router;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use router::Router;
pub use http_server::HttpServer;
