//! Example: Building a cache file programmatically
//!
//! Assembles a small cache with the builder, stamps it with a generator
//! section, writes it to disk, and reads it back.
//!
//! Usage: cargo run --example build_cache -- [output-path]

use ldcache::{CacheEntry, CacheFile, Error, ExtensionSection};
use std::env;

fn main() -> Result<(), Error> {
    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/ldcache-demo/ld.so.cache".to_string());

    let mut libc = CacheEntry::new("/usr/lib/libc.so.6");
    libc.flags = 0x0303;

    let file = CacheFile::builder()
        .entries(vec![
            libc,
            CacheEntry::new("/usr/lib/libm.so.6"),
            CacheEntry::new("/usr/lib/libpthread.so.0"),
        ])
        .extensions(vec![ExtensionSection::generator(format!(
            "ldcache {}",
            env!("CARGO_PKG_VERSION")
        ))])
        .build();

    file.save(&out)?;
    println!("Wrote {} entries to {}", file.entries.len(), out);

    let decoded = CacheFile::load(&out)?;
    print!("Read back:\n{}", decoded.file.summary());

    Ok(())
}
