//! Error types for codec and cursor operations.

use snafu::Snafu;

/// Error returned by checked codec and cursor operations.
///
/// Every failure leaves the buffer and the cursor offset untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum BufferError {
    /// A field does not fit between the offset and the end of the buffer.
    #[snafu(display("{width} byte field at offset {offset} does not fit in a {len} byte buffer"))]
    OutOfRange {
        /// Start of the field.
        offset: usize,
        /// Bytes the field needs.
        width: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// A reposition landed before the start of the buffer.
    #[snafu(display("moving offset {base} by {delta} lands before the start of the buffer"))]
    NegativeOffset {
        /// Offset the move was relative to.
        base: usize,
        /// Requested move.
        delta: isize,
    },

    /// A reposition landed past the end of the buffer.
    #[snafu(display("offset {offset} is past the end of a {len} byte buffer"))]
    PastEnd {
        /// Requested offset, saturated at `usize::MAX`.
        offset: usize,
        /// Length of the buffer.
        len: usize,
    },
}

/// Result type for codec and cursor operations.
pub type Result<T, E = BufferError> = core::result::Result<T, E>;

#[cfg(feature = "std")]
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::OutOfRange { .. } => std::io::ErrorKind::UnexpectedEof,
            BufferError::NegativeOffset { .. } | BufferError::PastEnd { .. } => {
                std::io::ErrorKind::InvalidInput
            }
        };
        std::io::Error::new(kind, err)
    }
}
