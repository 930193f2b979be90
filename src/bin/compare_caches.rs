use bpaf::Bpaf;
use ldcache::{CacheFile, Decoded, Error};
use std::path::PathBuf;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options)]
struct Options {
    #[bpaf(positional("our_cache"))]
    /// Our cache file
    our_cache: PathBuf,

    #[bpaf(positional("real_cache"))]
    /// Real cache file
    real_cache: PathBuf,
}

fn compare_caches(ours: &Decoded, real: &Decoded) {
    println!("=== Cache Comparison ===");
    println!(
        "Our cache: {} libraries, {} string bytes, {} warnings",
        ours.file.header.nlibs,
        ours.file.header.len_strings,
        ours.warnings.len()
    );
    println!(
        "Real cache: {} libraries, {} string bytes, {} warnings",
        real.file.header.nlibs,
        real.file.header.len_strings,
        real.warnings.len()
    );

    // Check magic
    let our_summary = ours.file.summary();
    let real_summary = real.file.summary();
    if our_summary.magic != real_summary.magic {
        println!(
            "❌ Magic mismatch: {} vs {}",
            our_summary.magic, real_summary.magic
        );
    } else {
        println!("✅ Magic matches: {}", our_summary.magic);
    }

    // Check header structure
    if ours.file.header.nlibs == real.file.header.nlibs {
        println!("✅ Library count matches: {}", ours.file.header.nlibs);
    } else {
        println!(
            "❌ Library count mismatch: {} vs {}",
            ours.file.header.nlibs, real.file.header.nlibs
        );
    }

    // Compare a few entries
    let entries_to_compare = std::cmp::min(5, ours.file.entries.len());
    for i in 0..entries_to_compare {
        if i < real.file.entries.len() {
            let our_entry = &ours.file.entries[i];
            let real_entry = &real.file.entries[i];

            if our_entry.name == real_entry.name {
                println!("✅ Entry {} name matches: {}", i, our_entry.name);
            } else {
                println!(
                    "❌ Entry {} name mismatch: {} vs {}",
                    i, our_entry.name, real_entry.name
                );
            }

            if our_entry.flags != real_entry.flags {
                println!(
                    "❌ Entry {} flags mismatch: {:#x} vs {:#x}",
                    i, our_entry.flags, real_entry.flags
                );
            }
        }
    }

    // Compare generator stamps
    match (ours.file.generator(), real.file.generator()) {
        (Some(a), Some(b)) if a == b => println!("✅ Generator matches: {}", a),
        (Some(a), Some(b)) => println!("❌ Generator mismatch: {} vs {}", a, b),
        (a, b) => println!("Generators: {:?} vs {:?}", a, b),
    }
}

fn main() -> Result<(), Error> {
    let options = options().run();

    let ours = CacheFile::load(&options.our_cache)?;
    let real = CacheFile::load(&options.real_cache)?;

    for warning in ours.warnings.iter().chain(real.warnings.iter()) {
        eprintln!("warning: {}", warning);
    }

    compare_caches(&ours, &real);

    Ok(())
}
