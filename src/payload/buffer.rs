//! Fixed-capacity output buffer for the payload encoder.

use crate::error::PayloadError;

/// A byte area of fixed capacity with a write cursor.
///
/// Every append is all-or-nothing: a chunk that does not fit leaves the
/// buffer untouched and reports [`PayloadError::BufferOverflow`]. The
/// cursor never exceeds the capacity.
#[derive(Debug, Clone)]
pub struct PayloadBuffer {
    bytes: Box<[u8]>,
    cursor: usize,
}

impl PayloadBuffer {
    /// Creates a buffer of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        PayloadBuffer {
            bytes: vec![0u8; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Remaining space in bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    /// The written part of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.cursor]
    }

    /// Appends a whole chunk, returning the new total length.
    ///
    /// Fails without writing anything if the chunk exceeds the remaining
    /// capacity.
    pub fn append(&mut self, chunk: &[u8]) -> Result<usize, PayloadError> {
        if chunk.len() > self.remaining() {
            return Err(PayloadError::BufferOverflow {
                needed: chunk.len(),
                available: self.remaining(),
            });
        }
        self.bytes[self.cursor..self.cursor + chunk.len()].copy_from_slice(chunk);
        self.cursor += chunk.len();
        Ok(self.cursor)
    }

    /// Copies the written bytes into `dst` and returns how many were
    /// copied (bounded by the destination length).
    pub fn copy_to(&self, dst: &mut [u8]) -> usize {
        let n = self.cursor.min(dst.len());
        dst[..n].copy_from_slice(&self.bytes[..n]);
        n
    }

    /// Rewinds the cursor; the stored bytes are logically discarded but
    /// not cleared.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayloadError;

    #[test]
    fn test_append_advances_cursor() {
        let mut buf = PayloadBuffer::with_capacity(8);
        assert_eq!(buf.append(&[1, 2, 3]).unwrap(), 3);
        assert_eq!(buf.append(&[4]).unwrap(), 4);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(buf.remaining(), 4);
    }

    #[test]
    fn test_overflow_leaves_buffer_unchanged() {
        let mut buf = PayloadBuffer::with_capacity(4);
        buf.append(&[1, 2, 3]).unwrap();
        let err = buf.append(&[4, 5]).unwrap_err();
        assert_eq!(
            err,
            PayloadError::BufferOverflow {
                needed: 2,
                available: 1
            }
        );
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_copy_to_and_reset() {
        let mut buf = PayloadBuffer::with_capacity(4);
        buf.append(&[0xAA, 0xBB]).unwrap();

        let mut dst = [0u8; 8];
        assert_eq!(buf.copy_to(&mut dst), 2);
        assert_eq!(&dst[..2], &[0xAA, 0xBB]);

        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 4);
    }
}
