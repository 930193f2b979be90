// Error and warning types for the cache codec
use std::fmt;
use std::io;

/// Failures that abort a decode or encode.
///
/// Anything recoverable (a damaged extension area, an unfamiliar magic)
/// is reported as a [`Warning`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A fixed-size structure needed more bytes than the file holds.
    #[error("truncated {what}: need {expected} bytes, {actual} available")]
    Truncated {
        what: &'static str,
        expected: u64,
        actual: u64,
    },

    /// An entry's name offset points outside the string table.
    #[error("string offset {offset} outside table (base {base}, {len} bytes)")]
    BadStringOffset { offset: u32, base: u64, len: u32 },

    /// A resolved library name is not valid UTF-8.
    #[error("invalid UTF-8 in string table at offset {offset}")]
    InvalidUtf8 { offset: u32 },

    /// A library name holds a NUL byte and cannot be stored.
    #[error("library name contains NUL: {name:?}")]
    EmbeddedNul { name: String },

    /// The encoded file would not fit the format's 32-bit offsets.
    #[error("cache too large: {bytes} bytes overflows 32-bit offsets")]
    TooLarge { bytes: u64 },

    /// The aligned extension slot falls inside the string table, so the
    /// requested extension sections cannot be written.
    #[error("extension slot at {aligned} sits before data ending at {pos}")]
    ExtensionOverlap { pos: u64, aligned: u64 },
}

/// Recoverable conditions noticed while decoding.
///
/// The dynamic linker keeps working from the library list alone, so none
/// of these fail the decode; they surface here so callers can tell "the
/// file has no extensions" apart from "the extensions were unreadable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Header magic or version differ from `glibc-ld.so.cache` / `1.1`.
    UnknownMagic { magic: [u8; 17], version: [u8; 3] },
    /// The extension descriptor table ended early; only the first `read`
    /// of `count` descriptors were kept.
    ExtensionTableTruncated { read: u32, count: u32 },
    /// An extension payload sat outside the file; this section and the
    /// ones after it were dropped.
    ExtensionDataUnreadable { tag: u32, offset: u32, size: u32 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownMagic { magic, version } => write!(
                f,
                "unrecognized cache magic {:?} version {:?}",
                String::from_utf8_lossy(magic),
                String::from_utf8_lossy(version)
            ),
            Warning::ExtensionTableTruncated { read, count } => write!(
                f,
                "extension table truncated: {read} of {count} descriptors readable"
            ),
            Warning::ExtensionDataUnreadable { tag, offset, size } => write!(
                f,
                "extension section tag {tag} unreadable at offset {offset} ({size} bytes)"
            ),
        }
    }
}
