//! `std::io` adapters for [`Cursor`].
//!
//! The buffer never grows: writes stop at its end and report a short count.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::{Cursor, SeekOrigin};

impl<B: AsRef<[u8]>> Read for Cursor<B> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.remaining_bytes();
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        *self.offset_mut() += n;
        Ok(n)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Write for Cursor<B> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let start = self.offset();
        let n = self.remaining().min(data.len());
        self.get_mut()[start..start + n].copy_from_slice(&data[..n]);
        *self.offset_mut() += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<B: AsRef<[u8]>> Seek for Cursor<B> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (delta, origin) = match pos {
            SeekFrom::Start(n) => {
                let offset = usize::try_from(n).unwrap_or(usize::MAX);
                self.set_offset(offset)?;
                return Ok(offset as u64);
            }
            SeekFrom::Current(n) => (n, SeekOrigin::Current),
            SeekFrom::End(n) => (n, SeekOrigin::End),
        };
        let delta = isize::try_from(delta).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek delta does not fit in isize",
            )
        })?;
        let offset = Cursor::seek(self, delta, origin)?;
        Ok(offset as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.offset() as u64)
    }
}
