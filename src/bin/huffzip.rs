use clap::Parser;
use huffzip::compress_file;
use huffzip::config::DEFAULT_SUFFIX;
use huffzip::CompressOptions;
use log::*;
use std::path::PathBuf;

/// Compresses files with a static huffman code.
#[derive(Parser, Debug)]
#[clap(version, long_about = None)]
struct Args {
    /// Files to compress, each one is written to <FILE><SUFFIX>
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Suffix appended to the names of compressed files
    #[clap(short = 'S', long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Overwrite existing output files
    #[clap(short, long)]
    force: bool,

    /// Sets verbosity. -v shows each file, -vvv is chatty
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Only report errors
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn options(&self) -> CompressOptions {
        CompressOptions {
            suffix: self.suffix.clone(),
            force: self.force,
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(args.level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    let options = args.options();
    let mut failed = 0;
    for path in &args.files {
        if let Err(err) = compress_file(path, &options) {
            error!("{}: {}", path.display(), err);
            failed += 1;
        }
    }

    if failed != 0 {
        error!("{} of {} files failed", failed, args.files.len());
        std::process::exit(1);
    }
}
