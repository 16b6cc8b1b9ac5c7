use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use linexml::{error::Result, FormatConfig, Indent, XmlFile};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    input: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent with this many spaces instead of tabs
    #[arg(long, value_name = "N")]
    spaces: Option<usize>,

    /// Only validate the input
    #[arg(long)]
    check: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading file: {}", args.input.display());
    let mut input = XmlFile::open(&args.input)?;
    let structure = input.read()?.clone();

    if args.check {
        info!("{} is well-formed", args.input.display());
        return Ok(());
    }

    let config = FormatConfig {
        indent: args.spaces.map_or(Indent::Tabs, Indent::Spaces),
    };

    match args.output {
        Some(path) => XmlFile::create(path)?
            .with_format_config(config)
            .write(structure)?,
        None => print!(
            "{}",
            linexml::utils::to_string_with_config(&structure, &config)?
        ),
    }

    Ok(())
}
