//! Fixed-width integer codec and offset cursor.
//!
//! Integers of 1, 2, 4 and 8 bytes, signed or unsigned, are packed in either
//! [`Host`] order (least-significant byte first) or [`Network`] order
//! (most-significant byte first), independent of the platform's native order.
//!
//! - [`decode`] / [`encode`] are stateless and bounds-checked.
//! - [`decode_unchecked`] / [`encode_unchecked`] and the raw-pointer
//!   [`decode_raw`] / [`encode_raw`] skip validation for hot loops over
//!   buffers whose bounds are already established.
//! - [`Cursor`] tracks an offset and advances it as values are read and
//!   written.
//!
//! ```
//! use binary_buffer_core::{Cursor, Host, Network, decode};
//!
//! let buf = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99];
//! assert_eq!(decode::<u16, Host>(&buf, 0).unwrap(), 0x1100);
//! assert_eq!(decode::<u16, Network>(&buf, 0).unwrap(), 0x0011);
//!
//! let mut cursor = Cursor::new(&buf[..], 5).unwrap();
//! assert_eq!(cursor.read_i32_network().unwrap(), 0x5566_7788);
//! assert_eq!(cursor.offset(), 9);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod codec;
mod cursor;
mod error;
#[cfg(feature = "std")]
mod io;
mod order;
mod primitive;
mod record;

#[cfg(test)]
mod tests;

pub use codec::{decode, decode_raw, decode_unchecked, encode, encode_raw, encode_unchecked};
pub use cursor::{Cursor, SeekOrigin};
pub use error::{BufferError, Result};
pub use order::{BigEndian, ByteOrder, Host, LittleEndian, Network};
pub use primitive::Primitive;
pub use record::Record;
