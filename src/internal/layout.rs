//! On-disk record widths.
//!
//! The format fixes these sizes; they are spelled out as constants rather
//! than derived with `size_of`, since the in-memory model structs have no
//! relationship to the wire layout.

/// Header record: magic(17) + version(3) + nlibs(4) + len_strings(4)
/// + flags(1) + pad(3) + extension_offset(4) + reserved(12).
pub(crate) const HEADER_SIZE: usize = 48;

/// Library entry record: flags(4) + key(4) + value(4) + osversion(4)
/// + hwcap(8).
pub(crate) const ENTRY_SIZE: usize = 24;

/// Extension area sub-header: magic(4) + count(4).
pub(crate) const EXTENSION_HEADER_SIZE: usize = 8;

/// Extension section descriptor: tag(4) + flags(4) + offset(4) + size(4).
pub(crate) const EXTENSION_SECTION_HEADER_SIZE: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_widths_match_their_field_sums() {
        assert_eq!(HEADER_SIZE, 17 + 3 + 4 + 4 + 1 + 3 + 4 + 12);
        assert_eq!(ENTRY_SIZE, 4 + 4 + 4 + 4 + 8);
        assert_eq!(EXTENSION_HEADER_SIZE, 4 + 4);
        assert_eq!(EXTENSION_SECTION_HEADER_SIZE, 4 + 4 + 4 + 4);
    }
}
