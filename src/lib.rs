// ldcache - glibc ld.so.cache codec
// MIT, 2025

//! Reading and writing glibc `ld.so.cache` files.
//!
//! The dynamic linker consults this cache instead of walking library
//! directories at program start. This crate implements the binary codec
//! for the "new format" (`glibc-ld.so.cache` 1.1): the fixed header, the
//! library entry table, the string table, and the optional extension
//! area trailing it (generator stamps, glibc-hwcaps data).
//!
//! Decoding is strict about the core tables and lenient about
//! extensions: a damaged extension area never fails a decode, it yields
//! [`Warning`]s and fewer sections instead, matching how the dynamic
//! linker itself degrades.
//!
//! # Example: Read a cache file
//!
//! ```no_run
//! use ldcache::CacheFile;
//!
//! let decoded = CacheFile::load("/etc/ld.so.cache")?;
//! print!("{}", decoded.file.summary());
//! for entry in &decoded.file.entries {
//!     println!("{} (flags {:#x})", entry.name, entry.flags);
//! }
//! # Ok::<(), ldcache::Error>(())
//! ```
//!
//! # Example: Build and write a cache
//!
//! ```no_run
//! use ldcache::{CacheEntry, CacheFile, ExtensionSection};
//!
//! let file = CacheFile::builder()
//!     .entries(vec![CacheEntry::new("/usr/lib/libdemo.so.1")])
//!     .extensions(vec![ExtensionSection::generator("demo-tool 1.0")])
//!     .build();
//! file.save("/tmp/ld.so.cache")?;
//! # Ok::<(), ldcache::Error>(())
//! ```

mod internal;

pub mod cache;
pub mod endian;
pub mod error;

// Main public API exports
pub use cache::{
    CacheEntry, CacheFile, CacheHeader, CacheSummary, Decoded, ExtensionHeader, ExtensionSection,
    SectionSummary, CACHE_MAGIC, CACHE_VERSION, EXTENSION_TAG_GENERATOR, EXTENSION_TAG_GLIBC_HWCAPS,
};
pub use endian::Endian;
pub use error::{Error, Warning};
