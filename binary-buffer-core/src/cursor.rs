//! Offset-tracking cursor over a byte buffer.
//!
//! The cursor is generic over its storage: anything that is `AsRef<[u8]>` can
//! be read, anything that is also `AsMut<[u8]>` can be written. The buffer is
//! only ever exposed as a fixed-length slice, so its length cannot change
//! while the cursor holds it.
//!
//! # Example
//!
//! ```
//! use binary_buffer_core::{Cursor, SeekOrigin};
//!
//! let mut buf = [0u8; 8];
//! let mut cursor = Cursor::new(&mut buf[..], 0).unwrap();
//! cursor.write_u16_network(0xCAFE).unwrap();
//! cursor.write_u32(7).unwrap();
//! assert_eq!(cursor.offset(), 6);
//!
//! cursor.seek(0, SeekOrigin::Begin).unwrap();
//! assert_eq!(cursor.read_u16_network().unwrap(), 0xCAFE);
//! assert_eq!(cursor.peek_u32().unwrap(), 7);
//! assert_eq!(cursor.offset(), 2);
//! ```

use log::trace;

use crate::codec::{self, check_range};
use crate::error::{NegativeOffsetSnafu, OutOfRangeSnafu, PastEndSnafu, Result};
use crate::{ByteOrder, Host, Network, Primitive};

/// Base a [`Cursor::seek`] delta is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekOrigin {
    /// Offset 0.
    Begin,
    /// The current offset.
    Current,
    /// The buffer length, one past the last byte.
    End,
}

/// A byte buffer paired with a read/write offset.
///
/// `offset <= len` holds between calls. Reads and writes advance the offset
/// by the width of the value only when they succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<B> {
    buf: B,
    offset: usize,
}

impl<B: AsRef<[u8]>> Cursor<B> {
    /// Create a cursor positioned at `offset`.
    ///
    /// The start offset must address a byte of the buffer (`offset < len`).
    /// This is stricter than [`set_offset`](Self::set_offset) and
    /// [`seek`](Self::seek), which also accept `offset == len`; in
    /// particular an empty buffer cannot host a cursor.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if
    /// `offset >= len`.
    pub fn new(buf: B, offset: usize) -> Result<Self> {
        let len = buf.as_ref().len();
        if offset >= len {
            trace!("rejecting cursor start {offset} for {len} byte buffer");
            return OutOfRangeSnafu {
                offset,
                width: 1usize,
                len,
            }
            .fail();
        }
        Ok(Self { buf, offset })
    }

    /// Current offset.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move to an absolute offset. `offset == len` is allowed.
    ///
    /// # Errors
    ///
    /// [`BufferError::PastEnd`](crate::BufferError::PastEnd) if
    /// `offset > len`; the offset is left unchanged.
    pub fn set_offset(&mut self, offset: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            trace!("rejecting offset {offset} past end of {len} byte buffer");
            return PastEndSnafu { offset, len }.fail();
        }
        self.offset = offset;
        Ok(())
    }

    /// Move by `delta` relative to `origin` and return the new offset.
    ///
    /// The target must lie in `0..=len`.
    ///
    /// # Errors
    ///
    /// [`BufferError::NegativeOffset`](crate::BufferError::NegativeOffset) if
    /// the target is before the start,
    /// [`BufferError::PastEnd`](crate::BufferError::PastEnd) if it is past
    /// the end. The offset is left unchanged.
    pub fn seek(&mut self, delta: isize, origin: SeekOrigin) -> Result<usize> {
        let len = self.len();
        let base = match origin {
            SeekOrigin::Begin => 0,
            SeekOrigin::Current => self.offset,
            SeekOrigin::End => len,
        };
        let Some(target) = base.checked_add_signed(delta) else {
            if delta < 0 {
                trace!("rejecting seek by {delta} from {base}: before start");
                return NegativeOffsetSnafu { base, delta }.fail();
            }
            trace!("rejecting seek by {delta} from {base}: overflow");
            return PastEndSnafu {
                offset: usize::MAX,
                len,
            }
            .fail();
        };
        self.set_offset(target)?;
        Ok(target)
    }

    /// Length of the underlying buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes between the offset and the end of the buffer.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len() - self.offset
    }

    /// The bytes between the offset and the end of the buffer.
    #[inline]
    #[must_use]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[self.offset..]
    }

    /// Fail unless at least `n` bytes remain.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer
    /// than `n` bytes remain.
    #[inline]
    pub fn ensure_remaining(&self, n: usize) -> Result<()> {
        check_range(self.len(), self.offset, n)
    }

    /// The underlying buffer as a slice.
    #[inline]
    #[must_use]
    pub fn get_ref(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Give the buffer back.
    #[inline]
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Decode a `T` in `O` order at the offset without advancing.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer
    /// than `T::WIDTH` bytes remain.
    #[inline]
    pub fn peek<T: Primitive, O: ByteOrder>(&self) -> Result<T> {
        codec::decode::<T, O>(self.buf.as_ref(), self.offset)
    }

    /// Decode a `T` in `O` order at the offset, then advance by `T::WIDTH`.
    ///
    /// # Errors
    ///
    /// As [`peek`](Self::peek); the offset does not move on failure.
    #[inline]
    pub fn read<T: Primitive, O: ByteOrder>(&mut self) -> Result<T> {
        let value = self.peek::<T, O>()?;
        self.offset += T::WIDTH;
        Ok(value)
    }

    /// Advance past `n` bytes without decoding them.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer
    /// than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure_remaining(n)?;
        self.offset += n;
        Ok(())
    }

    pub(crate) fn offset_mut(&mut self) -> &mut usize {
        &mut self.offset
    }

    /// Borrowed cursor over the same bytes at the same offset.
    pub(crate) fn view(&self) -> Cursor<&[u8]> {
        Cursor {
            buf: self.buf.as_ref(),
            offset: self.offset,
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Cursor<B> {
    /// The underlying buffer as a mutable slice.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }

    /// Encode `value` in `O` order at the offset, then advance by `T::WIDTH`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer
    /// than `T::WIDTH` bytes remain; nothing is written and the offset does
    /// not move.
    #[inline]
    pub fn write<T: Primitive, O: ByteOrder>(&mut self, value: T) -> Result<()> {
        codec::encode::<T, O>(self.buf.as_mut(), self.offset, value)?;
        self.offset += T::WIDTH;
        Ok(())
    }
}

// One peek/read/write triple per (type, order), forwarding to the generic
// methods above.
macro_rules! cursor_accessors {
    ($($ty:ty, $order:ty, $label:literal => $peek:ident, $read:ident, $write:ident;)+) => {
        $(
            impl<B: AsRef<[u8]>> Cursor<B> {
                #[doc = concat!("Peek a ", $label, " `", stringify!($ty), "` without advancing.")]
                ///
                /// # Errors
                ///
                /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange)
                /// if the value does not fit.
                #[inline]
                pub fn $peek(&self) -> Result<$ty> {
                    self.peek::<$ty, $order>()
                }

                #[doc = concat!("Read a ", $label, " `", stringify!($ty), "` and advance past it.")]
                ///
                /// # Errors
                ///
                /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange)
                /// if the value does not fit.
                #[inline]
                pub fn $read(&mut self) -> Result<$ty> {
                    self.read::<$ty, $order>()
                }
            }

            impl<B: AsRef<[u8]> + AsMut<[u8]>> Cursor<B> {
                #[doc = concat!("Write a ", $label, " `", stringify!($ty), "` and advance past it.")]
                ///
                /// # Errors
                ///
                /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange)
                /// if the value does not fit.
                #[inline]
                pub fn $write(&mut self, value: $ty) -> Result<()> {
                    self.write::<$ty, $order>(value)
                }
            }
        )+
    };
}

cursor_accessors! {
    u8, Host, "single-byte" => peek_u8, read_u8, write_u8;
    i8, Host, "single-byte" => peek_i8, read_i8, write_i8;
    u16, Host, "host-order" => peek_u16, read_u16, write_u16;
    i16, Host, "host-order" => peek_i16, read_i16, write_i16;
    u32, Host, "host-order" => peek_u32, read_u32, write_u32;
    i32, Host, "host-order" => peek_i32, read_i32, write_i32;
    u64, Host, "host-order" => peek_u64, read_u64, write_u64;
    i64, Host, "host-order" => peek_i64, read_i64, write_i64;
    u16, Network, "network-order" => peek_u16_network, read_u16_network, write_u16_network;
    i16, Network, "network-order" => peek_i16_network, read_i16_network, write_i16_network;
    u32, Network, "network-order" => peek_u32_network, read_u32_network, write_u32_network;
    i32, Network, "network-order" => peek_i32_network, read_i32_network, write_i32_network;
    u64, Network, "network-order" => peek_u64_network, read_u64_network, write_u64_network;
    i64, Network, "network-order" => peek_i64_network, read_i64_network, write_i64_network;
}
