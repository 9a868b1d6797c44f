//! Error types for buffer construction and explicit range checks.
//!
//! Accessors themselves never return errors. Only allocation and the
//! opt-in [`ByteBuffer::check_range`](crate::ByteBuffer::check_range)
//! surface a [`BufferError`].

use thiserror::Error;

/// Errors reported by [`ByteBuffer`](crate::ByteBuffer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not provide the requested storage.
    #[error("failed to allocate {capacity} bytes of buffer storage")]
    Alloc { capacity: usize },

    /// A range does not fit inside the buffer's storage.
    #[error("range {offset}..{offset}+{len} exceeds buffer capacity {capacity}")]
    OutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BufferError::Alloc { capacity: 64 };
        assert_eq!(err.to_string(), "failed to allocate 64 bytes of buffer storage");

        let err = BufferError::OutOfRange {
            offset: 6,
            len: 4,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "range 6..6+4 exceeds buffer capacity 8");
    }
}
