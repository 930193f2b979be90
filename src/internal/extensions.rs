//! Extension area codec.
//!
//! The extension area is optional metadata after the string table:
//! generator stamps, glibc-hwcaps subdirectory names. The dynamic linker
//! must keep working from the library list alone, so damage in this
//! region never fails a decode; it produces [`Warning`]s and fewer
//! sections instead.

use byteorder::ByteOrder;
use tracing::debug;

use crate::cache::{ExtensionHeader, ExtensionSection};
use crate::error::{Error, Warning};
use crate::internal::layout::{EXTENSION_HEADER_SIZE, EXTENSION_SECTION_HEADER_SIZE};
use crate::internal::put_u32;
use crate::internal::reader::Reader;

/// Magic of the extension sub-header (`cache_extension_magic` in glibc).
pub(crate) const EXTENSION_MAGIC: u32 = 0xEAA4_2174;

/// Where the extension area lives relative to `pos`, the end of the
/// string table: round down to a multiple of 16, then 8 bytes in, which
/// 8-aligns the first descriptor after the sub-header. The slot can sit
/// *before* `pos`; decode still probes there and finds no valid magic.
pub(crate) fn aligned_extension_pos(pos: u64) -> u64 {
    (pos & !15) + 8
}

fn read_descriptor<E: ByteOrder>(r: &mut Reader<'_>) -> Result<ExtensionHeader, Error> {
    Ok(ExtensionHeader {
        tag: r.u32::<E>("extension descriptor")?,
        flags: r.u32::<E>("extension descriptor")?,
        offset: r.u32::<E>("extension descriptor")?,
        size: r.u32::<E>("extension descriptor")?,
    })
}

/// Decode the extension area at the current (already aligned) position.
///
/// Returns the sections that could be fully read plus warnings for
/// anything that could not. A missing or unrecognized area is simply
/// zero sections with zero warnings.
pub(crate) fn decode<E: ByteOrder>(r: &mut Reader<'_>) -> (Vec<ExtensionSection>, Vec<Warning>) {
    let magic = match r.u32::<E>("extension header") {
        Ok(magic) => magic,
        Err(_) => return (Vec::new(), Vec::new()),
    };
    if magic != EXTENSION_MAGIC {
        return (Vec::new(), Vec::new());
    }
    let count = match r.u32::<E>("extension header") {
        Ok(count) => count,
        Err(_) => return (Vec::new(), Vec::new()),
    };
    debug!("extension area: {} sections", count);

    let mut warnings = Vec::new();
    let mut descriptors = Vec::new();
    for read in 0..count {
        match read_descriptor::<E>(r) {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(_) => {
                warnings.push(Warning::ExtensionTableTruncated { read, count });
                break;
            }
        }
    }

    let mut sections = Vec::new();
    for header in descriptors {
        match r.slice_at(u64::from(header.offset), u64::from(header.size)) {
            Some(data) => sections.push(ExtensionSection {
                header,
                data: data.to_vec(),
            }),
            None => {
                // Later payloads usually sit past the same cut, so stop.
                warnings.push(Warning::ExtensionDataUnreadable {
                    tag: header.tag,
                    offset: header.offset,
                    size: header.size,
                });
                break;
            }
        }
    }
    (sections, warnings)
}

/// Append the extension area: sub-header, every descriptor, then every
/// payload packed right after the descriptor table, with each
/// descriptor's offset and size recomputed for this layout.
///
/// `aligned` is the absolute file offset at which `out` currently ends.
pub(crate) fn encode<E: ByteOrder>(
    out: &mut Vec<u8>,
    sections: &[ExtensionSection],
    aligned: u64,
) -> Result<(), Error> {
    let count = u32::try_from(sections.len()).map_err(|_| Error::TooLarge {
        bytes: sections.len() as u64,
    })?;
    put_u32::<E>(out, EXTENSION_MAGIC);
    put_u32::<E>(out, count);

    let mut payload_pos = aligned
        + EXTENSION_HEADER_SIZE as u64
        + sections.len() as u64 * EXTENSION_SECTION_HEADER_SIZE as u64;
    for section in sections {
        let offset =
            u32::try_from(payload_pos).map_err(|_| Error::TooLarge { bytes: payload_pos })?;
        let size = u32::try_from(section.data.len()).map_err(|_| Error::TooLarge {
            bytes: section.data.len() as u64,
        })?;
        put_u32::<E>(out, section.header.tag);
        put_u32::<E>(out, section.header.flags);
        put_u32::<E>(out, offset);
        put_u32::<E>(out, size);
        payload_pos += u64::from(size);
    }
    for section in sections {
        out.extend_from_slice(&section.data);
    }
    Ok(())
}
