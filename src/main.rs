use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use paloalto_header::commands::header_ops::write_headers;
use paloalto_header::file_utils::read_header_lines;
use paloalto_header::{HeaderError, OutputFormat};

const VERSION: &str = concat!(
    env!("PALOALTO_HEADER_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ", ",
    env!("TARGET"),
    ")"
);

/// Transform Palo Alto header list to Tenzir CSV header
#[derive(Parser, Debug)]
#[command(name = "paloalto_header", version = VERSION, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input_string", "from_file"])))]
struct Cli {
    /// Input string to transform, e.g. "Format: Receive Time, Serial Number, FUTURE_USE"
    input_string: Option<String>,

    /// Read one field list per line from a file ("-" for stdin)
    #[arg(short = 'f', long, value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Print each header as a JSON object instead of a CSV line
    #[arg(long)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HeaderError> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Csv
    };

    let raw_headers = match (cli.input_string, cli.from_file) {
        (Some(input), _) => vec![input],
        (None, Some(path)) => read_header_lines(&path)?,
        // clap rejects this combination before we get here
        (None, None) => Vec::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = write_headers(&mut out, &raw_headers, format)?;
    info!(headers = written, ?format, "done");

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
