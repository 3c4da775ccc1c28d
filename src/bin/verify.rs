use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use gzheader::{io_utils::CliError, verify, VerifyConfig, DEFAULT_ARRAY_NAME};

const USAGE: &str = "使用方法 / Usage: verify header_file.h";

/// Check that a generated header decompresses to an HTML page.
///
/// Exits with status 1 when the check fails.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Generated header file
    header: PathBuf,
    /// Name of the array to check
    #[arg(long, default_value = DEFAULT_ARRAY_NAME)]
    name: String,
    /// Also print the report as JSON
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
    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let config = VerifyConfig::with_name(args.name);
    let report = verify(&args.header, &config).map_err(CliError::from)?;
    report.print();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(report.valid)
}
