//! Cache header codec.

use byteorder::ByteOrder;

use crate::cache::CacheHeader;
use crate::error::Error;
use crate::internal::layout::HEADER_SIZE;
use crate::internal::put_u32;
use crate::internal::reader::Reader;

/// Decode the 48-byte header at the current position.
///
/// Magic and version are carried, not validated; the caller decides what
/// a mismatch means. Padding and reserved bytes are skipped.
pub(crate) fn decode<E: ByteOrder>(r: &mut Reader<'_>) -> Result<CacheHeader, Error> {
    let raw = r.take(HEADER_SIZE, "cache header")?;

    let mut magic = [0u8; 17];
    magic.copy_from_slice(&raw[..17]);
    let mut version = [0u8; 3];
    version.copy_from_slice(&raw[17..20]);

    Ok(CacheHeader {
        magic,
        version,
        nlibs: E::read_u32(&raw[20..24]),
        len_strings: E::read_u32(&raw[24..28]),
        flags: raw[28],
        // raw[29..32] is padding, raw[36..48] is reserved.
        extension_offset: E::read_u32(&raw[32..36]),
    })
}

/// Append the 48-byte header record, zeroing padding and reserved bytes.
pub(crate) fn encode<E: ByteOrder>(out: &mut Vec<u8>, hdr: &CacheHeader) {
    out.extend_from_slice(&hdr.magic);
    out.extend_from_slice(&hdr.version);
    put_u32::<E>(out, hdr.nlibs);
    put_u32::<E>(out, hdr.len_strings);
    out.push(hdr.flags);
    out.extend_from_slice(&[0u8; 3]);
    put_u32::<E>(out, hdr.extension_offset);
    out.extend_from_slice(&[0u8; 12]);
}
