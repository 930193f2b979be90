//! Library entry table codec.

use byteorder::ByteOrder;

use crate::error::Error;
use crate::internal::layout::ENTRY_SIZE;
use crate::internal::reader::Reader;
use crate::internal::{put_u32, put_u64};

/// One entry record as stored on disk.
///
/// `key` and `value` are absolute file offsets into the string table;
/// name resolution happens later, once the table itself is in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub flags: u32,
    pub key: u32,
    pub value: u32,
    pub osversion: u32,
    pub hwcap: u64,
}

/// Decode exactly `nlibs` records following the header.
///
/// The whole table is bounds-checked up front so a corrupt count fails
/// immediately instead of after millions of short reads.
pub(crate) fn decode_table<E: ByteOrder>(
    r: &mut Reader<'_>,
    nlibs: u32,
) -> Result<Vec<RawEntry>, Error> {
    let needed = u64::from(nlibs) * ENTRY_SIZE as u64;
    if needed > r.remaining() {
        return Err(Error::Truncated {
            what: "library entry table",
            expected: needed,
            actual: r.remaining(),
        });
    }

    let mut entries = Vec::with_capacity(nlibs as usize);
    for _ in 0..nlibs {
        entries.push(RawEntry {
            flags: r.u32::<E>("library entry")?,
            key: r.u32::<E>("library entry")?,
            value: r.u32::<E>("library entry")?,
            osversion: r.u32::<E>("library entry")?,
            hwcap: r.u64::<E>("library entry")?,
        });
    }
    Ok(entries)
}

/// Append one 24-byte record.
pub(crate) fn encode_record<E: ByteOrder>(out: &mut Vec<u8>, rec: &RawEntry) {
    put_u32::<E>(out, rec.flags);
    put_u32::<E>(out, rec.key);
    put_u32::<E>(out, rec.value);
    put_u32::<E>(out, rec.osversion);
    put_u64::<E>(out, rec.hwcap);
}

#[cfg(test)]
mod tests {
    use byteorder::{BigEndian, LittleEndian};

    use super::*;

    fn sample() -> RawEntry {
        RawEntry {
            flags: 0x0303,
            key: 108,
            value: 96,
            osversion: 0,
            hwcap: 0x4000_0000_0000_0000,
        }
    }

    #[test]
    fn record_is_exactly_entry_size() {
        let mut out = Vec::new();
        encode_record::<LittleEndian>(&mut out, &sample());
        assert_eq!(out.len(), ENTRY_SIZE);
    }

    #[test]
    fn decodes_records_in_file_order() {
        let mut data = Vec::new();
        encode_record::<LittleEndian>(&mut data, &sample());
        encode_record::<LittleEndian>(
            &mut data,
            &RawEntry {
                flags: 1,
                key: 2,
                value: 3,
                osversion: 4,
                hwcap: 5,
            },
        );

        let mut r = Reader::new(&data);
        let table = decode_table::<LittleEndian>(&mut r, 2).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], sample());
        assert_eq!(table[1].hwcap, 5);
        assert_eq!(r.position(), 2 * ENTRY_SIZE as u64);
    }

    #[test]
    fn empty_table_is_fine() {
        let mut r = Reader::new(&[]);
        assert!(decode_table::<LittleEndian>(&mut r, 0).unwrap().is_empty());
    }

    #[test]
    fn short_table_fails_up_front() {
        // One record and change.
        let data = [0u8; 30];
        let mut r = Reader::new(&data);
        assert!(matches!(
            decode_table::<LittleEndian>(&mut r, 2),
            Err(Error::Truncated {
                what: "library entry table",
                expected: 48,
                actual: 30,
            })
        ));
    }

    #[test]
    fn absurd_count_fails_without_looping() {
        let data = [0u8; 48];
        let mut r = Reader::new(&data);
        assert!(decode_table::<LittleEndian>(&mut r, u32::MAX).is_err());
    }

    #[test]
    fn big_endian_round_trip() {
        let mut data = Vec::new();
        encode_record::<BigEndian>(&mut data, &sample());
        let mut r = Reader::new(&data);
        assert_eq!(decode_table::<BigEndian>(&mut r, 1).unwrap()[0], sample());
    }
}
