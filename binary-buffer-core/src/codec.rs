//! Stateless fixed-width integer codec.
//!
//! Three tiers, each delegating to the one below:
//!
//! - [`decode`] / [`encode`]: bounds-checked, return [`BufferError::OutOfRange`]
//!   when the field does not fit.
//! - [`decode_unchecked`] / [`encode_unchecked`]: slice + offset, caller
//!   guarantees the field fits.
//! - [`decode_raw`] / [`encode_raw`]: raw pointer, the only place the bit
//!   logic lives.
//!
//! # Example
//!
//! ```
//! use binary_buffer_core::{Host, Network, decode, encode};
//!
//! let mut buf = [0u8; 6];
//! encode::<u32, Network>(&mut buf, 2, 0x1122_3344).unwrap();
//! assert_eq!(buf, [0, 0, 0x11, 0x22, 0x33, 0x44]);
//!
//! assert_eq!(decode::<u16, Host>(&buf, 2).unwrap(), 0x2211);
//! assert!(decode::<u32, Host>(&buf, 3).is_err());
//! ```

use snafu::ensure;

use crate::error::{OutOfRangeSnafu, Result};
use crate::{ByteOrder, Primitive};

/// Check that `width` bytes starting at `offset` fit in `len` bytes.
#[inline]
pub(crate) fn check_range(len: usize, offset: usize, width: usize) -> Result<()> {
    ensure!(
        offset <= len && len - offset >= width,
        OutOfRangeSnafu { offset, width, len }
    );
    Ok(())
}

/// Decode a `T` stored in `O` order at `buf[offset..]`.
///
/// # Errors
///
/// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer than
/// `T::WIDTH` bytes remain after `offset`.
#[inline]
pub fn decode<T: Primitive, O: ByteOrder>(buf: &[u8], offset: usize) -> Result<T> {
    check_range(buf.len(), offset, T::WIDTH)?;
    // SAFETY: check_range guarantees offset + T::WIDTH <= buf.len().
    Ok(unsafe { decode_unchecked::<T, O>(buf, offset) })
}

/// Encode `value` in `O` order at `buf[offset..]`.
///
/// Nothing is written on failure.
///
/// # Errors
///
/// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer than
/// `T::WIDTH` bytes remain after `offset`.
#[inline]
pub fn encode<T: Primitive, O: ByteOrder>(buf: &mut [u8], offset: usize, value: T) -> Result<()> {
    check_range(buf.len(), offset, T::WIDTH)?;
    // SAFETY: check_range guarantees offset + T::WIDTH <= buf.len().
    unsafe { encode_unchecked::<T, O>(buf, offset, value) };
    Ok(())
}

/// Decode without bounds validation.
///
/// # Safety
///
/// `offset + T::WIDTH <= buf.len()` must hold. Debug builds assert it.
#[inline]
pub unsafe fn decode_unchecked<T: Primitive, O: ByteOrder>(buf: &[u8], offset: usize) -> T {
    debug_assert!(
        offset <= buf.len() && buf.len() - offset >= T::WIDTH,
        "decode_unchecked: {} byte field at offset {} overruns {} byte buffer",
        T::WIDTH,
        offset,
        buf.len()
    );
    unsafe { decode_raw::<T, O>(buf.as_ptr().add(offset)) }
}

/// Encode without bounds validation.
///
/// # Safety
///
/// `offset + T::WIDTH <= buf.len()` must hold. Debug builds assert it.
#[inline]
pub unsafe fn encode_unchecked<T: Primitive, O: ByteOrder>(
    buf: &mut [u8],
    offset: usize,
    value: T,
) {
    debug_assert!(
        offset <= buf.len() && buf.len() - offset >= T::WIDTH,
        "encode_unchecked: {} byte field at offset {} overruns {} byte buffer",
        T::WIDTH,
        offset,
        buf.len()
    );
    unsafe { encode_raw::<T, O>(buf.as_mut_ptr().add(offset), value) }
}

/// Decode `T::WIDTH` bytes starting at `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for reads of `T::WIDTH` bytes. No alignment is
/// required.
#[inline(always)]
pub unsafe fn decode_raw<T: Primitive, O: ByteOrder>(ptr: *const u8) -> T {
    let mut bits = 0u64;
    for k in 0..T::WIDTH {
        let byte = unsafe { *ptr.add(k) };
        bits |= u64::from(byte) << O::shift(T::WIDTH, k);
    }
    T::from_bits(bits)
}

/// Encode `value` into the `T::WIDTH` bytes starting at `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `T::WIDTH` bytes. No alignment is
/// required.
#[inline(always)]
pub unsafe fn encode_raw<T: Primitive, O: ByteOrder>(ptr: *mut u8, value: T) {
    let bits = value.to_bits();
    for k in 0..T::WIDTH {
        let byte = (bits >> O::shift(T::WIDTH, k)) as u8;
        unsafe { *ptr.add(k) = byte };
    }
}
