//! Per-connection request buffer.

use bytes::BytesMut;

/// Initial capacity for a fresh connection buffer.
pub const INITIAL_CAPACITY: usize = 128;

/// Blank line separating the request head from the payload.
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Append-only byte accumulator owned by a single connection.
///
/// Bytes are kept in arrival order; appending grows the storage and never
/// touches what is already there. Storage is released when the buffer is
/// dropped, which happens on every path that closes the connection.
#[derive(Debug)]
pub struct RequestBuffer {
    data: BytesMut,
}

impl RequestBuffer {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
        }
    }

    /// Copies `bytes` to the end of the buffer, doubling capacity when short.
    pub fn append(&mut self, bytes: &[u8]) {
        let needed = self.data.len() + bytes.len();
        if needed > self.data.capacity() {
            let target = needed.max(self.data.capacity() * 2);
            self.data.reserve(target - self.data.len());
        }
        self.data.extend_from_slice(bytes);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Offset of the header terminator, if the full request head has arrived.
    pub fn header_end(&self) -> Option<usize> {
        find_header_end(&self.data)
    }
}

impl Default for RequestBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the offset of the first `\r\n\r\n` in `buf`.
pub fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_arrival_order() {
        let mut buf = RequestBuffer::new();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= INITIAL_CAPACITY);

        buf.append(b"GET / HT");
        buf.append(b"TP/1.1\r\n");

        assert_eq!(buf.as_slice(), b"GET / HTTP/1.1\r\n");
        assert!(buf.len() <= buf.capacity());
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut buf = RequestBuffer::new();
        let chunk = vec![b'x'; 300];
        buf.append(&chunk);
        buf.append(&chunk);

        assert_eq!(buf.len(), 600);
        assert!(buf.capacity() >= 600);
        assert!(buf.as_slice().iter().all(|&b| b == b'x'));
    }

    #[test]
    fn terminator_split_across_appends() {
        let mut buf = RequestBuffer::new();
        buf.append(b"GET / HTTP/1.1\r\n\r");
        assert_eq!(buf.header_end(), None);

        buf.append(b"\n");
        assert_eq!(buf.header_end(), Some(14));
    }
}
