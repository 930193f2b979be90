//! String table codec and name resolution.
//!
//! The string table is raw NUL-terminated names packed back to back.
//! Entries address it with absolute file offsets, so resolution needs
//! both the table slice and the offset at which it starts.

use crate::error::Error;
use crate::internal::reader::Reader;

/// Take the raw string table (`len_strings` bytes) at the current
/// position.
pub(crate) fn decode_table<'a>(r: &mut Reader<'a>, len_strings: u32) -> Result<&'a [u8], Error> {
    r.take(len_strings as usize, "string table")
}

/// Resolve a name from its absolute `offset`.
///
/// `base` is the absolute offset at which the table begins. The name runs
/// to the first NUL, or to the end of the table when no NUL follows (an
/// unterminated final string is tolerated, a name outside the table is
/// not).
pub(crate) fn resolve_name<'a>(table: &'a [u8], base: u64, offset: u32) -> Result<&'a str, Error> {
    let bad = || Error::BadStringOffset {
        offset,
        base,
        len: table.len() as u32,
    };
    let rel = u64::from(offset).checked_sub(base).ok_or_else(bad)?;
    if rel >= table.len() as u64 {
        return Err(bad());
    }
    let tail = &table[rel as usize..];
    let name = match tail.iter().position(|&b| b == 0) {
        Some(nul) => &tail[..nul],
        None => tail,
    };
    std::str::from_utf8(name).map_err(|_| Error::InvalidUtf8 { offset })
}

/// Byte length of `name`'s directory component, without a trailing slash.
///
/// The on-disk `key` offset points this many bytes past `value`, turning
/// the full path into its basename-ish tail: `"/usr/lib/libc.so.6"` gives
/// 8, `"/libc.so.6"` gives 1, a bare `"libc.so.6"` gives 0.
pub(crate) fn dir_len(name: &str) -> usize {
    match name.rfind('/') {
        Some(0) => 1,
        Some(i) => i,
        None => 0,
    }
}

/// Builds the on-disk string table during encode.
///
/// Names are appended in entry order, each followed by a NUL. Duplicates
/// are stored again; nothing in the format requires sharing and ldconfig
/// itself does not bother.
#[derive(Default)]
pub(crate) struct TableBuilder {
    buf: Vec<u8>,
}

impl TableBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `name` plus its NUL, returning the table-relative offset of
    /// the name's first byte.
    pub(crate) fn push(&mut self, name: &str) -> Result<u64, Error> {
        if name.as_bytes().contains(&0) {
            return Err(Error::EmbeddedNul {
                name: name.to_owned(),
            });
        }
        let offset = self.buf.len() as u64;
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.push(0);
        Ok(offset)
    }

    pub(crate) fn len(&self) -> u64 {
        self.buf.len() as u64
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
