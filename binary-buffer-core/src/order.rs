//! Byte orders.
//!
//! A byte order is nothing more than a shift schedule: the bit position that
//! byte `k` of a `width`-byte field occupies inside the value. Everything else
//! about encoding and decoding is shared between orders.

mod sealed {
    pub trait Sealed {}
}

/// Byte order used to lay an integer out in memory.
///
/// Sealed: the only orders are [`Host`] and [`Network`].
pub trait ByteOrder: sealed::Sealed + Copy + 'static {
    /// Short lowercase name, used in diagnostics and benchmark labels.
    const NAME: &'static str;

    /// Bit shift of byte `k` within a `width`-byte field.
    ///
    /// `k < width` always holds.
    fn shift(width: usize, k: usize) -> u32;
}

/// Least-significant byte first (little-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Host;

/// Most-significant byte first (big-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Network;

/// Alias for [`Host`].
pub type LittleEndian = Host;

/// Alias for [`Network`].
pub type BigEndian = Network;

impl sealed::Sealed for Host {}
impl sealed::Sealed for Network {}

impl ByteOrder for Host {
    const NAME: &'static str = "host";

    #[inline(always)]
    fn shift(_width: usize, k: usize) -> u32 {
        (8 * k) as u32
    }
}

impl ByteOrder for Network {
    const NAME: &'static str = "network";

    #[inline(always)]
    fn shift(width: usize, k: usize) -> u32 {
        (8 * (width - 1 - k)) as u32
    }
}
