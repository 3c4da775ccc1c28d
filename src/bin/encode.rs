use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use gzheader::{encode, io_utils::CliError, EncodeConfig, GzHeaderError, DEFAULT_ARRAY_NAME};

const USAGE: &str = "使用方法 / Usage: encode input.html output.h";

/// Gzip an HTML page and write it out as a C header byte array.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input HTML file
    input: PathBuf,
    /// Output header path
    output: PathBuf,
    /// Name of the generated array
    #[arg(long, default_value = DEFAULT_ARRAY_NAME)]
    var_name: String,
    /// Also print the size statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    gzheader::init_tracing();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            println!("{USAGE}");
            std::process::exit(1);
        }
    };
    if let Err(e) = run(args) {
        // The missing-input diagnostic is part of the tool's stdout report.
        match e.downcast_ref::<CliError>() {
            Some(cli) if matches!(cli.source, GzHeaderError::InputNotFound(_)) => println!("{e}"),
            _ => eprintln!("{e}"),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = EncodeConfig {
        var_name: args.var_name,
        ..EncodeConfig::default()
    };
    let stats = encode(&args.input, &args.output, &config).map_err(CliError::from)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats.to_json())?);
    }
    Ok(())
}
