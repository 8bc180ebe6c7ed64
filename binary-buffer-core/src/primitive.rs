//! Fixed-width integers the codec understands.

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can be packed into and out of bytes.
///
/// Values travel through the codec as a 64-bit bit pattern. [`to_bits`]
/// zero-extends, [`from_bits`] keeps exactly the low `WIDTH` bytes and then
/// reinterprets them, so signed values come back sign-extended from their own
/// width rather than from the accumulator's.
///
/// Sealed: implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64` and
/// `i64`.
///
/// [`to_bits`]: Primitive::to_bits
/// [`from_bits`]: Primitive::from_bits
pub trait Primitive: sealed::Sealed + Copy + 'static {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Narrow a bit pattern to `WIDTH` bytes and reinterpret it.
    fn from_bits(bits: u64) -> Self;

    /// The value's bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;
}

// Unsigned twin of each type, so the narrowing cast never sign-extends.
macro_rules! impl_primitive {
    ($($ty:ty => $unsigned:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline(always)]
                fn from_bits(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }

                #[inline(always)]
                fn to_bits(self) -> u64 {
                    self as $unsigned as u64
                }
            }
        )+
    };
}

impl_primitive!(
    u8 => u8,
    i8 => u8,
    u16 => u16,
    i16 => u16,
    u32 => u32,
    i32 => u32,
    u64 => u64,
    i64 => u64,
);
