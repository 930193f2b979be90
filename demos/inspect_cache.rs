//! Example: Reading and displaying cache file contents
//!
//! Decodes a cache file, prints its summary, and shows a few entries,
//! including any warnings the decoder raised along the way.
//!
//! Usage: cargo run --example inspect_cache -- [cache-path]

use ldcache::{CacheFile, Error};
use std::env;

fn main() -> Result<(), Error> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "/etc/ld.so.cache".to_string());

    let decoded = CacheFile::load(&path)?;
    for warning in &decoded.warnings {
        eprintln!("warning: {warning}");
    }

    print!("{}", decoded.file.summary());

    println!("\nFirst 5 entries:");
    for entry in decoded.file.entries.iter().take(5) {
        println!("  {} (flags {:#x})", entry.name, entry.flags);
        if entry.hwcap != 0 {
            println!("    hwcap: {:#018x}", entry.hwcap);
        }
    }

    println!("\nSearching for 'libc':");
    for entry in decoded
        .file
        .entries
        .iter()
        .filter(|e| e.name.contains("libc"))
    {
        println!("  {}", entry.name);
    }

    Ok(())
}
