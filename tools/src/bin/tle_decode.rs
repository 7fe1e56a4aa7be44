use clap::Parser;
use std::fs::{self, File};
use std::io::{self, prelude::*};
use std::path::{Path, PathBuf};
use tle_decoder::TleDecoder;
use tools::config::Config;
use tracing::info;

/// Decode a TLE set file into JSON
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// All satellites are kept when not provided.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Output file path to write, stdout when not provided
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TLE file to read, '-' reads stdin
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(p) => Config::load(p)?,
        None => Config::default(),
    };
    if let Some(name) = cfg.name.as_ref() {
        info!(config = name.as_str(), "Using configuration");
    }

    let text = if opts.input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&opts.input)?
    };

    let decoder = TleDecoder::new(&text)?;
    let records = cfg.record_filter()?.apply(decoder.decode()?);
    info!(
        entries = decoder.len(),
        selected = records.len(),
        "Decoded TLE set"
    );

    let json = if opts.compact || cfg.compact() {
        serde_json::to_string(&records)?
    } else {
        serde_json::to_string_pretty(&records)?
    };

    match opts.output {
        Some(p) => {
            let mut output = File::create(p)?;
            writeln!(&mut output, "{json}")?;
        }
        None => println!("{json}"),
    }

    Ok(())
}
