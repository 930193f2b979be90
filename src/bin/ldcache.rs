use bpaf::Bpaf;
use camino::Utf8PathBuf;
use ldcache::{CacheFile, Endian, Error};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options)]
struct Options {
    #[bpaf(short, long)]
    /// Verbose output
    verbose: bool,

    #[bpaf(short, long)]
    /// Print every library entry
    entries: bool,

    #[bpaf(short('b'), long)]
    /// Read integer fields as big-endian
    big_endian: bool,

    #[bpaf(short('o'), long, argument("OUT"))]
    /// Re-encode the cache to this path
    output: Option<Utf8PathBuf>,

    #[bpaf(positional("CACHE"), fallback("/etc/ld.so.cache".into()))]
    /// Cache file to inspect
    cache: Utf8PathBuf,
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// # Arguments
///
/// * `verbose` - If true, sets log level to DEBUG, otherwise INFO
pub fn init_logging(verbose: bool) {
    let filter_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Set up environment filter - allow overriding via RUST_LOG env var
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter_level.into())
        .from_env_lossy();

    // Configure the subscriber format
    let fmt_layer = fmt::layer()
        .with_level(verbose)
        .with_target(verbose)
        .with_line_number(verbose)
        .without_time()
        .compact();

    // Initialize the subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    debug!("Logging initialized with level: {}", filter_level);
}

fn main() -> Result<(), Error> {
    let options = options().run();

    // Initialize logging system
    init_logging(options.verbose);

    let endian = if options.big_endian {
        Endian::Big
    } else {
        Endian::Little
    };

    debug!("Reading cache: {}", options.cache);
    let data = std::fs::read(&options.cache)?;
    let decoded = CacheFile::decode_with(&data, endian)?;

    for warning in &decoded.warnings {
        warn!("{}: {}", options.cache, warning);
    }

    print!("{}", decoded.file.summary());

    if options.entries {
        for entry in &decoded.file.entries {
            if entry.hwcap != 0 {
                println!(
                    "\t{} (flags {:#x}, hwcap {:#018x})",
                    entry.name, entry.flags, entry.hwcap
                );
            } else {
                println!("\t{} (flags {:#x})", entry.name, entry.flags);
            }
        }
    }

    if let Some(output) = options.output {
        let encoded = decoded.file.encode_with(endian)?;
        std::fs::write(&output, &encoded)?;
        info!("Wrote {} bytes to {}", encoded.len(), output);
    }

    Ok(())
}
