extern crate std;

#[cfg(feature = "std")]
mod io;

/// Shared fixture: `00 11 22 ... 99`.
pub(crate) const SAMPLE: [u8; 10] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99];
