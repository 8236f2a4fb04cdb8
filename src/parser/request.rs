//! HTTP request reading and representation.

use std::collections::HashMap;
use std::str::FromStr;
use tokio::io::AsyncRead;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::reader::WireReader;
use crate::parser::version::HttpVersion;

const CONTENT_LENGTH: &str = "Content-Length";
const HEADER_SEPARATOR: &str = ": ";

/// Represents a fully read HTTP request.
///
/// A value of this type only exists for a request whose head parsed cleanly
/// and whose body, if announced via `Content-Length`, was read in full.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET or POST)
    pub method: Method,
    /// The request path, exactly as it appeared on the request line
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers; on duplicate names the last occurrence wins
    pub headers: HashMap<String, String>,
    /// The request body, `Content-Length` bytes long, or empty
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Get a header value by its exact, case-sensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Check if a header exists under its exact, case-sensitive name.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }
}

/// Read and parse one HTTP request from the wire.
///
/// Consumes the request line, the header lines up to the blank separator,
/// and then exactly `Content-Length` body bytes when that header is present.
/// Nothing past the request is read from the stream.
///
/// # Examples
///
/// ```
/// use nanohttp_rs::{read_request, Method, WireReader};
///
/// # async fn demo() -> Result<(), nanohttp_rs::ParserError> {
/// let raw: &[u8] = b"GET /echo/hello HTTP/1.1\r\nHost: example.com\r\n\r\n";
/// let mut reader = WireReader::new(raw);
/// let request = read_request(&mut reader).await?;
///
/// assert_eq!(request.method, Method::GET);
/// assert_eq!(request.path, "/echo/hello");
/// assert_eq!(request.header("Host"), Some("example.com"));
/// # Ok(())
/// # }
/// ```
pub async fn read_request<R: AsyncRead + Unpin>(
    reader: &mut WireReader<R>,
) -> Result<HttpRequest, Error> {
    // Request line: method, path, version
    let line = reader.read_line().await?;
    let line = String::from_utf8(line)
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;

    let parts: Vec<&str> = line.split_ascii_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(line.clone()));
    }
    let method = Method::from_str(parts[0])?;
    let path = parts[1].to_string();
    let version = HttpVersion::from_str(parts[2])?;

    // Headers, up to the blank line separating head from body
    let mut headers = HashMap::new();
    loop {
        let line = reader.read_line().await?;
        if line.is_empty() {
            break;
        }
        let line =
            String::from_utf8(line).map_err(|_| Error::MalformedHeader("Invalid UTF-8".to_string()))?;
        match line.split_once(HEADER_SEPARATOR) {
            Some((name, value)) => {
                headers.insert(name.to_string(), value.trim().to_string());
            }
            None => return Err(Error::MalformedHeader(line)),
        }
    }

    // Body: exactly Content-Length bytes when announced, else empty
    let body = match headers.get(CONTENT_LENGTH) {
        Some(value) => {
            let length: usize = value
                .parse()
                .map_err(|_| Error::InvalidContentLength(value.clone()))?;
            reader.read_exact(length).await?
        }
        None => Vec::new(),
    };

    Ok(HttpRequest {
        method,
        path,
        version,
        headers,
        body,
    })
}
