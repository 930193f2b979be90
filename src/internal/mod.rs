//! Internal wire-format modules.
//!
//! These modules hold the byte-level codecs for each region of a cache
//! file and are not part of the public API. The model types in
//! [`crate::cache`] are the public surface; everything here is
//! `pub(crate)`.

use byteorder::ByteOrder;

pub(crate) mod entries;
pub(crate) mod extensions;
pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod reader;
pub(crate) mod strings;

/// Append `v` to `out` in byte order `E`.
pub(crate) fn put_u32<E: ByteOrder>(out: &mut Vec<u8>, v: u32) {
    let mut buf = [0u8; 4];
    E::write_u32(&mut buf, v);
    out.extend_from_slice(&buf);
}

pub(crate) fn put_u64<E: ByteOrder>(out: &mut Vec<u8>, v: u64) {
    let mut buf = [0u8; 8];
    E::write_u64(&mut buf, v);
    out.extend_from_slice(&buf);
}
