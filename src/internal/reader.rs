//! Bounds-checked reads over an in-memory cache image.

use byteorder::ByteOrder;

use crate::error::Error;

/// Forward reader over a byte buffer with an explicit position.
///
/// Positions are absolute file offsets. Seeks may land before the current
/// position (the extension area can start below the end of the string
/// table) or past the end of the buffer; any read that runs out of bytes
/// fails with [`Error::Truncated`] naming the structure being read.
///
/// Slices handed out borrow the underlying buffer, not the reader, so
/// callers can keep them while continuing to advance.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: u64,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    /// Current absolute offset.
    pub(crate) fn position(&self) -> u64 {
        self.pos
    }

    /// Move to an absolute offset, in either direction.
    pub(crate) fn seek(&mut self, pos: u64) {
        self.pos = pos;
    }

    /// Bytes between the current position and the end of the buffer.
    pub(crate) fn remaining(&self) -> u64 {
        (self.buf.len() as u64).saturating_sub(self.pos)
    }

    /// Take the next `n` bytes, or fail naming `what`.
    pub(crate) fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], Error> {
        if n == 0 {
            return Ok(&[]);
        }
        let available = self.remaining();
        if n as u64 > available {
            return Err(Error::Truncated {
                what,
                expected: n as u64,
                actual: available,
            });
        }
        // pos + n fits in the buffer, so the casts are exact.
        let start = self.pos as usize;
        self.pos += n as u64;
        Ok(&self.buf[start..start + n])
    }

    pub(crate) fn u32<E: ByteOrder>(&mut self, what: &'static str) -> Result<u32, Error> {
        Ok(E::read_u32(self.take(4, what)?))
    }

    pub(crate) fn u64<E: ByteOrder>(&mut self, what: &'static str) -> Result<u64, Error> {
        Ok(E::read_u64(self.take(8, what)?))
    }

    /// Absolute slice `[offset, offset + len)`, independent of the current
    /// position. `None` when any part falls outside the buffer.
    pub(crate) fn slice_at(&self, offset: u64, len: u64) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        if end > self.buf.len() as u64 {
            return None;
        }
        Some(&self.buf[offset as usize..end as usize])
    }
}
