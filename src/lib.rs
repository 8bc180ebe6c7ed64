//! A `no_std` fixed-width integer codec with host and network byte order,
//! plus an offset-tracking cursor.
//!
//! # Standalone codec
//!
//! ```
//! use binary_buffer::{Host, Network, decode, encode};
//!
//! let buf = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99];
//! assert_eq!(decode::<u64, Host>(&buf, 1).unwrap(), 0x8877_6655_4433_2211);
//! assert_eq!(decode::<i32, Network>(&buf, 5).unwrap(), 0x5566_7788);
//!
//! let mut out = [0u8; 2];
//! encode::<u16, Network>(&mut out, 0, 0x0102).unwrap();
//! assert_eq!(out, [0x01, 0x02]);
//! ```
//!
//! # Cursor
//!
//! ```
//! use binary_buffer::{Cursor, SeekOrigin};
//!
//! let buf = [0u8, 1, 2, 3];
//! let mut cursor = Cursor::new(&buf[..], 0).unwrap();
//!
//! assert_eq!(cursor.seek(-1, SeekOrigin::End).unwrap(), 3);
//! assert_eq!(cursor.read_u8().unwrap(), 3);
//! assert!(cursor.seek(1, SeekOrigin::Current).is_err());
//! ```
//!
//! # Features
//!
//! - `std`: `std::io::{Read, Write, Seek}` for [`Cursor`].
//! - `macros`: `#[derive(Record)]` for fixed-width structs.

#![no_std]
#![warn(missing_docs)]

pub use binary_buffer_core::{
    BigEndian, BufferError, ByteOrder, Cursor, Host, LittleEndian, Network, Primitive, Record,
    Result, SeekOrigin, decode, decode_raw, decode_unchecked, encode, encode_raw, encode_unchecked,
};

#[cfg(feature = "macros")]
pub use binary_buffer_macros::Record;
