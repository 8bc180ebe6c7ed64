//! Fixed-width records composed of primitive fields.
//!
//! A [`Record`] reads and writes itself field by field through a [`Cursor`].
//! [`Cursor::read_record`] and [`Cursor::write_record`] check the full width
//! up front, so a record either transfers completely or not at all.

use crate::{ByteOrder, Cursor, Primitive, Result};

/// A value with a fixed encoded width, made of [`Primitive`] fields.
///
/// The order parameter `O` is the order requested by the caller. Records
/// with a pinned order (see `#[record(order = "...")]` on the derive) ignore
/// it for their own fields.
pub trait Record: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Read the fields in declaration order.
    ///
    /// Called by [`Cursor::read_record`] once `WIDTH` bytes are known to be
    /// available.
    ///
    /// # Errors
    ///
    /// Propagates the first field error.
    fn read_fields<O: ByteOrder, B: AsRef<[u8]>>(cursor: &mut Cursor<B>) -> Result<Self>;

    /// Write the fields in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates the first field error.
    fn write_fields<O: ByteOrder, B: AsRef<[u8]> + AsMut<[u8]>>(
        &self,
        cursor: &mut Cursor<B>,
    ) -> Result<()>;
}

macro_rules! impl_record_for_primitive {
    ($($ty:ty),+) => {
        $(
            impl Record for $ty {
                const WIDTH: usize = <$ty as Primitive>::WIDTH;

                #[inline]
                fn read_fields<O: ByteOrder, B: AsRef<[u8]>>(cursor: &mut Cursor<B>) -> Result<Self> {
                    cursor.read::<$ty, O>()
                }

                #[inline]
                fn write_fields<O: ByteOrder, B: AsRef<[u8]> + AsMut<[u8]>>(
                    &self,
                    cursor: &mut Cursor<B>,
                ) -> Result<()> {
                    cursor.write::<$ty, O>(*self)
                }
            }
        )+
    };
}

impl_record_for_primitive!(u8, i8, u16, i16, u32, i32, u64, i64);

impl<T: Record + Copy + Default, const N: usize> Record for [T; N] {
    const WIDTH: usize = T::WIDTH * N;

    fn read_fields<O: ByteOrder, B: AsRef<[u8]>>(cursor: &mut Cursor<B>) -> Result<Self> {
        let mut out = [T::default(); N];
        for slot in &mut out {
            *slot = T::read_fields::<O, B>(cursor)?;
        }
        Ok(out)
    }

    fn write_fields<O: ByteOrder, B: AsRef<[u8]> + AsMut<[u8]>>(
        &self,
        cursor: &mut Cursor<B>,
    ) -> Result<()> {
        for item in self {
            item.write_fields::<O, B>(cursor)?;
        }
        Ok(())
    }
}

impl<B: AsRef<[u8]>> Cursor<B> {
    /// Read a whole record in `O` order and advance past it.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer
    /// than `R::WIDTH` bytes remain; the offset does not move.
    pub fn read_record<R: Record, O: ByteOrder>(&mut self) -> Result<R> {
        self.ensure_remaining(R::WIDTH)?;
        let start = self.offset();
        R::read_fields::<O, B>(self).inspect_err(|_| *self.offset_mut() = start)
    }

    /// Read a whole record without advancing.
    ///
    /// # Errors
    ///
    /// As [`read_record`](Self::read_record).
    pub fn peek_record<R: Record, O: ByteOrder>(&self) -> Result<R> {
        self.view().read_record::<R, O>()
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Cursor<B> {
    /// Write a whole record in `O` order and advance past it.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if fewer
    /// than `R::WIDTH` bytes remain; nothing is written and the offset does
    /// not move.
    pub fn write_record<R: Record, O: ByteOrder>(&mut self, record: &R) -> Result<()> {
        self.ensure_remaining(R::WIDTH)?;
        let start = self.offset();
        record
            .write_fields::<O, B>(self)
            .inspect_err(|_| *self.offset_mut() = start)
    }
}
