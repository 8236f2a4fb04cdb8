//! Buffered reading primitives for the HTTP wire format.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use crate::parser::error::Error;

/// A buffered reader over a byte stream exposing the two read shapes the
/// HTTP head and body need: line-delimited and length-delimited.
///
/// Both operations draw from the same internal buffer, so a line read never
/// strands bytes that a following [`read_exact`](WireReader::read_exact)
/// needs. Anything buffered past a line terminator is exactly what the next
/// read consumes first.
pub struct WireReader<R> {
    inner: BufReader<R>,
}

impl<R: AsyncRead + Unpin> WireReader<R> {
    /// Create a new wire reader over the given byte-stream source.
    pub fn new(source: R) -> Self {
        Self {
            inner: BufReader::new(source),
        }
    }

    /// Read one line, returning its bytes with the terminator stripped.
    ///
    /// Lines are CRLF-terminated; a bare LF is tolerated and stripped the
    /// same way. Reaching end of stream before a terminator is an
    /// [`Error::IncompleteRequest`].
    pub async fn read_line(&mut self) -> Result<Vec<u8>, Error> {
        let mut line = Vec::new();
        self.inner.read_until(b'\n', &mut line).await?;
        if line.last() != Some(&b'\n') {
            return Err(Error::IncompleteRequest);
        }
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Read exactly `n` bytes, waiting until they are available.
    ///
    /// Never consumes bytes past `n`. Reaching end of stream short of `n`
    /// bytes is an [`Error::TruncatedBody`].
    pub async fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; n];
        let mut filled = 0;
        while filled < n {
            let read = self.inner.read(&mut buf[filled..]).await?;
            if read == 0 {
                return Err(Error::TruncatedBody {
                    expected: n,
                    read: filled,
                });
            }
            filled += read;
        }
        Ok(buf)
    }
}
