//! Cache file model and whole-file decode/encode.
//!
//! [`CacheFile`] owns everything a cache image holds: the header, the
//! library entries with their names resolved out of the string table, and
//! the extension sections. Decoding returns the model together with any
//! [`Warning`]s; encoding rebuilds a complete image from the model alone,
//! recomputing every offset from the layout being written.

use std::fmt;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use memmap2::Mmap;
use tracing::{debug, warn};

use crate::endian::Endian;
use crate::error::{Error, Warning};
use crate::internal::entries::{self, RawEntry};
use crate::internal::extensions;
use crate::internal::header;
use crate::internal::layout::{ENTRY_SIZE, HEADER_SIZE};
use crate::internal::reader::Reader;
use crate::internal::strings::{self, TableBuilder};

/// Magic identifying the new-format cache (`cache_file_new` in glibc).
pub const CACHE_MAGIC: [u8; 17] = *b"glibc-ld.so.cache";

/// Format revision that goes with [`CACHE_MAGIC`].
pub const CACHE_VERSION: [u8; 3] = *b"1.1";

/// Extension tag for the generator string, the tool that wrote the file.
pub const EXTENSION_TAG_GENERATOR: u32 = 0;

/// Extension tag for glibc-hwcaps subdirectory names. Carried opaquely.
pub const EXTENSION_TAG_GLIBC_HWCAPS: u32 = 1;

/// Cache file header.
///
/// `nlibs`, `len_strings`, and `extension_offset` are refreshed from the
/// actual content on encode; the other fields are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheHeader {
    pub magic: [u8; 17],
    pub version: [u8; 3],
    /// Number of library entries.
    pub nlibs: u32,
    /// Byte length of the string table.
    pub len_strings: u32,
    /// Opaque flag byte. ldconfig stores an endianness marker here
    /// (2 little, 3 big); decode never interprets it.
    pub flags: u8,
    /// Offset of the extension area as recorded on disk. The alignment
    /// rule, not this field, locates the area on decode.
    pub extension_offset: u32,
}

impl CacheHeader {
    /// Fresh header for a cache to be written in `endian` order, with the
    /// flag byte ldconfig would use for that order.
    pub fn new(endian: Endian) -> Self {
        CacheHeader {
            magic: CACHE_MAGIC,
            version: CACHE_VERSION,
            nlibs: 0,
            len_strings: 0,
            flags: match endian {
                Endian::Little => 2,
                Endian::Big => 3,
            },
            extension_offset: 0,
        }
    }
}

impl Default for CacheHeader {
    fn default() -> Self {
        CacheHeader::new(Endian::Little)
    }
}

/// One library entry with its name resolved.
///
/// `flags`, `osversion`, and `hwcap` are opaque here; their bit meanings
/// belong to the dynamic linker, not the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub flags: u32,
    /// Library path as recorded in the cache, usually absolute.
    pub name: String,
    pub osversion: u32,
    pub hwcap: u64,
}

impl CacheEntry {
    /// Entry for `name` with zeroed metadata.
    pub fn new(name: impl Into<String>) -> Self {
        CacheEntry {
            flags: 0,
            name: name.into(),
            osversion: 0,
            hwcap: 0,
        }
    }
}

/// On-disk descriptor of one extension section.
///
/// `offset` and `size` describe where the payload sat in the file this
/// descriptor was decoded from; encode recomputes both for the layout it
/// writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionHeader {
    pub tag: u32,
    pub flags: u32,
    pub offset: u32,
    pub size: u32,
}

/// One extension section: descriptor plus payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSection {
    pub header: ExtensionHeader,
    pub data: Vec<u8>,
}

impl ExtensionSection {
    /// Section carrying `data` under `tag`, flags zero. The descriptor's
    /// layout fields are filled in when the file is encoded.
    pub fn new(tag: u32, data: Vec<u8>) -> Self {
        ExtensionSection {
            header: ExtensionHeader {
                tag,
                flags: 0,
                offset: 0,
                size: data.len() as u32,
            },
            data,
        }
    }

    /// Generator section (tag 0) naming the producing tool.
    pub fn generator(text: impl Into<String>) -> Self {
        ExtensionSection::new(EXTENSION_TAG_GENERATOR, text.into().into_bytes())
    }
}

/// In-memory model of a cache file.
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct CacheFile {
    #[builder(default)]
    pub header: CacheHeader,
    #[builder(default)]
    pub entries: Vec<CacheEntry>,
    #[builder(default)]
    pub extensions: Vec<ExtensionSection>,
}

/// A successful decode: the model plus whatever recoverable damage the
/// decoder noticed along the way.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub file: CacheFile,
    /// Empty for a fully clean file.
    pub warnings: Vec<Warning>,
}

impl CacheFile {
    /// Decode a little-endian cache image, the order every deployed cache
    /// uses.
    pub fn decode(data: &[u8]) -> Result<Decoded, Error> {
        Self::decode_with(data, Endian::Little)
    }

    /// Decode with an explicit byte order for the integer fields.
    pub fn decode_with(data: &[u8], endian: Endian) -> Result<Decoded, Error> {
        match endian {
            Endian::Little => decode_impl::<LittleEndian>(data),
            Endian::Big => decode_impl::<BigEndian>(data),
        }
    }

    /// Encode as a little-endian cache image.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        self.encode_with(Endian::Little)
    }

    /// Encode with an explicit byte order.
    pub fn encode_with(&self, endian: Endian) -> Result<Vec<u8>, Error> {
        match endian {
            Endian::Little => encode_impl::<LittleEndian>(self),
            Endian::Big => encode_impl::<BigEndian>(self),
        }
    }

    /// Map a cache file from disk and decode it (little-endian).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Decoded, Error> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            // mmap rejects zero-length files.
            return Err(Error::Truncated {
                what: "cache header",
                expected: HEADER_SIZE as u64,
                actual: 0,
            });
        }
        let map = unsafe { Mmap::map(&file)? };
        Self::decode(&map)
    }

    /// Encode (little-endian) and write to `path`, creating parent
    /// directories and syncing the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let data = self.encode()?;
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(path)?;
        file.write_all(&data)?;
        file.flush()?;
        file.sync_all()?;
        Ok(())
    }

    /// Generator string, if a tag-0 section carries one. Non-UTF-8 bytes
    /// are replaced rather than rejected.
    pub fn generator(&self) -> Option<String> {
        self.extensions
            .iter()
            .find(|s| s.header.tag == EXTENSION_TAG_GENERATOR)
            .map(|s| String::from_utf8_lossy(&s.data).into_owned())
    }

    /// Structured description of the file, printable via `Display`.
    ///
    /// Counts come from the header; decode and encode both keep those in
    /// line with the actual tables.
    pub fn summary(&self) -> CacheSummary {
        CacheSummary {
            magic: String::from_utf8_lossy(&self.header.magic).into_owned(),
            version: String::from_utf8_lossy(&self.header.version).into_owned(),
            nlibs: self.header.nlibs,
            len_strings: self.header.len_strings,
            sections: self
                .extensions
                .iter()
                .map(|s| SectionSummary {
                    tag: s.header.tag,
                    flags: s.header.flags,
                    size: s.data.len() as u64,
                })
                .collect(),
            generator: self.generator(),
        }
    }
}

/// Header-level description of a cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSummary {
    pub magic: String,
    pub version: String,
    pub nlibs: u32,
    pub len_strings: u32,
    pub sections: Vec<SectionSummary>,
    pub generator: Option<String>,
}

/// One extension section inside a [`CacheSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSummary {
    pub tag: u32,
    pub flags: u32,
    pub size: u64,
}

impl fmt::Display for CacheSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header:")?;
        writeln!(f, "  Magic [{}]", self.magic)?;
        writeln!(f, "  Version [{}]", self.version)?;
        writeln!(f, "  {} library entries.", self.nlibs)?;
        writeln!(f, "  String table is {} bytes long.", self.len_strings)?;
        for section in &self.sections {
            writeln!(f, "Extension section:")?;
            writeln!(f, "  Tag [{}]", section.tag)?;
            writeln!(f, "  Flags [{:#x}]", section.flags)?;
            writeln!(f, "  Size [{}]", section.size)?;
        }
        if let Some(generator) = &self.generator {
            writeln!(f, "Generator [{}]", generator)?;
        }
        Ok(())
    }
}

fn decode_impl<E: ByteOrder>(data: &[u8]) -> Result<Decoded, Error> {
    let mut r = Reader::new(data);
    let mut warnings = Vec::new();

    let hdr = header::decode::<E>(&mut r)?;
    debug!(
        "cache header: {} entries, {} string bytes",
        hdr.nlibs, hdr.len_strings
    );
    if hdr.magic != CACHE_MAGIC || hdr.version != CACHE_VERSION {
        let warning = Warning::UnknownMagic {
            magic: hdr.magic,
            version: hdr.version,
        };
        warn!("{warning}");
        warnings.push(warning);
    }

    let raw = entries::decode_table::<E>(&mut r, hdr.nlibs)?;

    let base = r.position();
    let table = strings::decode_table(&mut r, hdr.len_strings)?;

    let mut resolved = Vec::with_capacity(raw.len());
    for rec in &raw {
        let name = strings::resolve_name(table, base, rec.value)?;
        resolved.push(CacheEntry {
            flags: rec.flags,
            name: name.to_owned(),
            osversion: rec.osversion,
            hwcap: rec.hwcap,
        });
    }

    r.seek(extensions::aligned_extension_pos(r.position()));
    let (sections, extension_warnings) = extensions::decode::<E>(&mut r);
    for warning in &extension_warnings {
        warn!("{warning}");
    }
    warnings.extend(extension_warnings);

    Ok(Decoded {
        file: CacheFile {
            header: hdr,
            entries: resolved,
            extensions: sections,
        },
        warnings,
    })
}

fn encode_impl<E: ByteOrder>(file: &CacheFile) -> Result<Vec<u8>, Error> {
    let nlibs = u32::try_from(file.entries.len()).map_err(|_| Error::TooLarge {
        bytes: file.entries.len() as u64,
    })?;
    let table_base = HEADER_SIZE as u64 + u64::from(nlibs) * ENTRY_SIZE as u64;

    // The string table and the raw records are built together: each
    // record's offsets depend on where its name lands.
    let mut table = TableBuilder::new();
    let mut records = Vec::with_capacity(file.entries.len());
    for entry in &file.entries {
        let value64 = table_base + table.push(&entry.name)?;
        let key64 = value64 + strings::dir_len(&entry.name) as u64;
        let value = u32::try_from(value64).map_err(|_| Error::TooLarge { bytes: value64 })?;
        let key = u32::try_from(key64).map_err(|_| Error::TooLarge { bytes: key64 })?;
        records.push(RawEntry {
            flags: entry.flags,
            key,
            value,
            osversion: entry.osversion,
            hwcap: entry.hwcap,
        });
    }

    let len_strings =
        u32::try_from(table.len()).map_err(|_| Error::TooLarge { bytes: table.len() })?;
    let end = table_base + u64::from(len_strings);
    let aligned = extensions::aligned_extension_pos(end);

    let extension_offset = if file.extensions.is_empty() {
        0
    } else if aligned < end {
        // The slot would sit inside the string table.
        return Err(Error::ExtensionOverlap { pos: end, aligned });
    } else {
        u32::try_from(aligned).map_err(|_| Error::TooLarge { bytes: aligned })?
    };

    let mut out = Vec::new();
    header::encode::<E>(
        &mut out,
        &CacheHeader {
            nlibs,
            len_strings,
            extension_offset,
            ..file.header.clone()
        },
    );
    for rec in &records {
        entries::encode_record::<E>(&mut out, rec);
    }
    out.extend_from_slice(&table.into_bytes());

    if aligned >= end {
        out.resize(aligned as usize, 0);
        if !file.extensions.is_empty() {
            extensions::encode::<E>(&mut out, &file.extensions, aligned)?;
        }
    }
    debug!("encoded cache: {} bytes", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-built two-entry little-endian cache with one generator
    // section, laid out exactly as the format dictates.
    fn sample_image() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"glibc-ld.so.cache");
        data.extend_from_slice(b"1.1");
        data.extend_from_slice(&2u32.to_le_bytes()); // nlibs
        data.extend_from_slice(&34u32.to_le_bytes()); // len_strings
        data.push(2); // flags: little-endian marker
        data.extend_from_slice(&[0; 3]);
        data.extend_from_slice(&136u32.to_le_bytes()); // extension_offset
        data.extend_from_slice(&[0; 12]);
        assert_eq!(data.len(), 48);

        // Entries; the string table begins at 48 + 2 * 24 = 96.
        for (flags, key, value, osversion, hwcap) in [
            (0x0303u32, 100u32, 96u32, 0u32, 0u64),
            (0x0303, 117, 113, 0, 1),
        ] {
            data.extend_from_slice(&flags.to_le_bytes());
            data.extend_from_slice(&key.to_le_bytes());
            data.extend_from_slice(&value.to_le_bytes());
            data.extend_from_slice(&osversion.to_le_bytes());
            data.extend_from_slice(&hwcap.to_le_bytes());
        }

        // String table, 34 bytes ending at 130.
        data.extend_from_slice(b"/lib/libone.so.1\0/lib/libtwo.so.2\0");
        assert_eq!(data.len(), 130);

        // Padding to (130 & !15) + 8 = 136, then the extension area with
        // its payload at 136 + 8 + 16 = 160.
        data.resize(136, 0);
        data.extend_from_slice(&0xEAA4_2174u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes()); // tag
        data.extend_from_slice(&0u32.to_le_bytes()); // flags
        data.extend_from_slice(&160u32.to_le_bytes());
        data.extend_from_slice(&5u32.to_le_bytes());
        data.extend_from_slice(b"gen-1");
        data
    }

    #[test]
    fn decodes_the_core_tables() {
        let decoded = CacheFile::decode(&sample_image()).unwrap();
        assert!(decoded.warnings.is_empty());
        let file = &decoded.file;
        assert_eq!(file.header.nlibs, 2);
        assert_eq!(file.header.len_strings, 34);
        assert_eq!(file.entries.len(), file.header.nlibs as usize);
        assert_eq!(file.entries[0].name, "/lib/libone.so.1");
        assert_eq!(file.entries[0].flags, 0x0303);
        assert_eq!(file.entries[1].name, "/lib/libtwo.so.2");
        assert_eq!(file.entries[1].hwcap, 1);
    }

    #[test]
    fn decodes_the_extension_area() {
        let decoded = CacheFile::decode(&sample_image()).unwrap();
        assert_eq!(decoded.file.extensions.len(), 1);
        let section = &decoded.file.extensions[0];
        assert_eq!(section.header.tag, EXTENSION_TAG_GENERATOR);
        assert_eq!(section.data, b"gen-1");
        assert_eq!(decoded.file.generator().as_deref(), Some("gen-1"));
    }

    #[test]
    fn wrong_extension_magic_is_a_clean_absence() {
        let mut data = sample_image();
        data[136] ^= 0xFF;
        let decoded = CacheFile::decode(&data).unwrap();
        assert!(decoded.file.extensions.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn file_ending_at_the_string_table_has_no_extensions() {
        let data = sample_image();
        let decoded = CacheFile::decode(&data[..130]).unwrap();
        assert_eq!(decoded.file.entries.len(), 2);
        assert!(decoded.file.extensions.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn unknown_magic_is_reported_not_fatal() {
        let mut data = sample_image();
        data[0] = b'x';
        let decoded = CacheFile::decode(&data).unwrap();
        assert_eq!(decoded.warnings.len(), 1);
        assert!(matches!(decoded.warnings[0], Warning::UnknownMagic { .. }));
        assert_eq!(decoded.file.entries.len(), 2);
    }

    #[test]
    fn all_zero_header_decodes_to_an_empty_file_with_a_warning() {
        let decoded = CacheFile::decode(&[0u8; 48]).unwrap();
        assert!(decoded.file.entries.is_empty());
        assert!(decoded.file.extensions.is_empty());
        assert_eq!(decoded.warnings.len(), 1);
        assert!(matches!(decoded.warnings[0], Warning::UnknownMagic { .. }));
    }

    #[test]
    fn truncation_points_name_their_structure() {
        let data = sample_image();
        assert!(matches!(
            CacheFile::decode(&data[..40]),
            Err(Error::Truncated {
                what: "cache header",
                ..
            })
        ));
        assert!(matches!(
            CacheFile::decode(&data[..60]),
            Err(Error::Truncated {
                what: "library entry table",
                ..
            })
        ));
        assert!(matches!(
            CacheFile::decode(&data[..110]),
            Err(Error::Truncated {
                what: "string table",
                ..
            })
        ));
    }

    #[test]
    fn corrupt_name_offset_aborts_the_decode() {
        // Second entry's value field: header + one entry + flags + key.
        let at = 48 + 24 + 8;

        let mut data = sample_image();
        data[at..at + 4].copy_from_slice(&10u32.to_le_bytes());
        assert!(matches!(
            CacheFile::decode(&data),
            Err(Error::BadStringOffset {
                offset: 10,
                base: 96,
                ..
            })
        ));

        let mut data = sample_image();
        data[at..at + 4].copy_from_slice(&130u32.to_le_bytes());
        assert!(matches!(
            CacheFile::decode(&data),
            Err(Error::BadStringOffset { .. })
        ));
    }

    #[test]
    fn reencoding_a_decoded_file_is_byte_identical() {
        let original = CacheFile::decode(&sample_image()).unwrap().file;
        assert_eq!(original.encode().unwrap(), sample_image());
    }

    #[test]
    fn encode_recomputes_offsets_from_the_model() {
        // String table is 23 + 15 = 38 bytes, leaving the aligned slot
        // clear of the data: end 134, slot 136.
        let file = CacheFile::builder()
            .entries(vec![
                CacheEntry::new("/usr/lib/libgreet.so.3"),
                CacheEntry {
                    flags: 0x0303,
                    name: "/lib/libc.so.6".into(),
                    osversion: 0x0002_0624,
                    hwcap: 4,
                },
            ])
            .extensions(vec![ExtensionSection::generator("test-tool 0.1")])
            .build();

        let decoded = CacheFile::decode(&file.encode().unwrap()).unwrap();
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.file.header.nlibs, 2);
        assert_eq!(decoded.file.entries, file.entries);
        assert_eq!(decoded.file.generator().as_deref(), Some("test-tool 0.1"));
    }

    #[test]
    fn duplicate_names_each_get_their_own_string() {
        let file = CacheFile::builder()
            .entries(vec![
                CacheEntry::new("/lib/libdup.so.1"),
                CacheEntry::new("/lib/libdup.so.1"),
            ])
            .build();
        let decoded = CacheFile::decode(&file.encode().unwrap()).unwrap();
        assert_eq!(decoded.file.entries, file.entries);
        assert_eq!(decoded.file.header.len_strings, 2 * 17);
    }

    #[test]
    fn big_endian_round_trip() {
        let mut file = CacheFile::builder()
            .header(CacheHeader::new(Endian::Big))
            .entries(vec![CacheEntry::new("/lib/ld-linux-aarch64.so.1")])
            .build();
        file.entries[0].hwcap = 0x0123_4567_89AB_CDEF;

        let encoded = file.encode_with(Endian::Big).unwrap();
        let decoded = CacheFile::decode_with(&encoded, Endian::Big).unwrap();
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.file.entries, file.entries);
        assert_eq!(decoded.file.header.flags, 3);
    }

    #[test]
    fn zero_entry_cache_round_trips() {
        let encoded = CacheFile::default().encode().unwrap();
        // Header plus padding out to the aligned extension slot.
        assert_eq!(encoded.len(), 56);
        let decoded = CacheFile::decode(&encoded).unwrap();
        assert!(decoded.file.entries.is_empty());
        assert!(decoded.file.extensions.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn extension_overlap_is_an_encode_error() {
        // 48 + 24 + 5 = 77 ends past the slot at (77 & !15) + 8 = 72.
        let file = CacheFile::builder()
            .entries(vec![CacheEntry::new("x.so")])
            .extensions(vec![ExtensionSection::generator("g")])
            .build();
        assert!(matches!(
            file.encode(),
            Err(Error::ExtensionOverlap {
                pos: 77,
                aligned: 72,
            })
        ));
    }

    #[test]
    fn misaligned_tail_without_extensions_still_encodes() {
        let file = CacheFile::builder()
            .entries(vec![CacheEntry::new("x.so")])
            .build();
        let encoded = file.encode().unwrap();
        // No slot fits after the table, so nothing is padded.
        assert_eq!(encoded.len(), 77);
        let decoded = CacheFile::decode(&encoded).unwrap();
        assert_eq!(decoded.file.entries.len(), 1);
        assert!(decoded.file.extensions.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn embedded_nul_in_a_name_is_an_encode_error() {
        let file = CacheFile::builder()
            .entries(vec![CacheEntry::new("bad\0name.so")])
            .build();
        assert!(matches!(file.encode(), Err(Error::EmbeddedNul { .. })));
    }

    #[test]
    fn summary_mirrors_the_header_and_extensions() {
        let summary = CacheFile::decode(&sample_image()).unwrap().file.summary();
        assert_eq!(summary.magic, "glibc-ld.so.cache");
        assert_eq!(summary.version, "1.1");
        assert_eq!(summary.nlibs, 2);
        assert_eq!(summary.len_strings, 34);
        assert_eq!(summary.sections.len(), 1);
        assert_eq!(summary.generator.as_deref(), Some("gen-1"));

        let text = summary.to_string();
        assert!(text.contains("2 library entries."));
        assert!(text.contains("String table is 34 bytes long."));
        assert!(text.contains("Generator [gen-1]"));
    }

    // Mirrors the shape of a real glibc 2.36 cache: 65 libraries, a
    // 1421-byte string table, and a generator stamp.
    #[test]
    fn round_trips_a_glibc_sized_cache() {
        let mut entries = Vec::new();
        for i in 0..56 {
            entries.push(CacheEntry::new(format!("/usr/lib/libfix-{i:02}.so")));
        }
        for i in 0..9 {
            entries.push(CacheEntry::new(format!("/usr/lib/libfi-{i:02}.so")));
        }
        let file = CacheFile::builder()
            .entries(entries)
            .extensions(vec![ExtensionSection::generator(
                "ldconfig (GNU libc) stable release version 2.36",
            )])
            .build();

        let decoded = CacheFile::decode(&file.encode().unwrap()).unwrap();
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.file.header.nlibs, 65);
        assert_eq!(decoded.file.header.len_strings, 1421);
        assert_eq!(decoded.file.entries.len(), 65);

        let generator = &decoded.file.extensions[0];
        assert_eq!(generator.header.tag, EXTENSION_TAG_GENERATOR);
        assert_eq!(
            generator.data,
            b"ldconfig (GNU libc) stable release version 2.36"
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("ld.so.cache");

        let file = CacheFile::builder()
            .entries(vec![CacheEntry::new("/usr/lib/libz.so.1.2.13")])
            .extensions(vec![ExtensionSection::generator("roundtrip")])
            .build();
        file.save(&path).unwrap();

        let decoded = CacheFile::load(&path).unwrap();
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.file.entries, file.entries);
        assert_eq!(decoded.file.generator().as_deref(), Some("roundtrip"));
    }

    #[test]
    fn load_rejects_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.cache");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(
            CacheFile::load(&path),
            Err(Error::Truncated {
                what: "cache header",
                ..
            })
        ));
    }

    #[test]
    fn load_surfaces_io_errors() {
        assert!(matches!(
            CacheFile::load("/nonexistent/ld.so.cache"),
            Err(Error::Io(_))
        ));
    }
}
