mod input;

use basex::{AlgorithmRegistry, Codec, StreamingDecoder, StreamingEncoder};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use input::CliError;

#[derive(Parser)]
#[command(name = "basex")]
#[command(version)]
#[command(about = "Encode and decode binary data as base64, base58 or any custom digit alphabet", long_about = None)]
struct Cli {
    /// Algorithm: b64, b58, or a literal alphabet of two or more symbols
    #[arg(short, long, value_name = "ALGO", default_value = "b64")]
    algorithm: String,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// List built-in algorithms
    #[arg(short, long)]
    list: bool,

    /// File to process (reads stdin if absent or "-")
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let registry = AlgorithmRegistry::load_default()?;

    if cli.list {
        list_algorithms(&registry)?;
        return Ok(());
    }

    let codec = Codec::from_algorithm(&cli.algorithm, &registry)?;
    log::debug!("algorithm {:?} resolved to {}", cli.algorithm, codec.describe());

    let mut reader = input::open(cli.file.as_deref())?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let stats = if cli.decode {
        StreamingDecoder::new(&codec, &mut writer).decode(&mut reader)?
    } else {
        StreamingEncoder::new(&codec, &mut writer).encode(&mut reader)?
    };
    log::debug!("{:?}", stats);

    Ok(())
}

fn list_algorithms(registry: &AlgorithmRegistry) -> Result<(), CliError> {
    println!("Available algorithms:\n");
    for (name, config) in &registry.algorithms {
        let codec = config.build(name)?;
        let description = config.description.as_deref().unwrap_or("");
        println!("  {:<6} base-{:<3} {}", name, codec.radix(), description);
    }
    println!("\nAny other ALGO of two or more symbols is used as a literal digit alphabet.");
    Ok(())
}
