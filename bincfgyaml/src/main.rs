//! cfgyaml command-line tool: translate CFG configuration source into YAML.
//!
//! Usage: cfgyaml [OPTIONS] [OUTPUT]
//!
//! Options:
//!   -i, --input <FILE>     Read CFG source from FILE (stdin when omitted or "-")
//!   -o, --output <FILE>    Write YAML to FILE (same as the positional OUTPUT)
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   -v, --verbose          Log pipeline progress to stderr
//!   -h, --help             Print help
//!   -V, --version          Print version

use libcfgyaml::{parse_with_filename, translate_with_filename};
use std::fs;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "CFGYAML_LOG";

/// Name used in diagnostics when reading stdin.
const STDIN_NAME: &str = "stdin";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut input_path: Option<&str> = None;
    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("cfgyaml {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-i" | "--input" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --input requires an argument");
                    process::exit(1);
                }
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                // "-" is explicit stdin
                if args[i] != "-" {
                    input_path = Some(args[i].as_str());
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                set_output(&mut output_file, &args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                set_output(&mut output_file, arg);
            }
        }
        i += 1;
    }

    init_logging(verbose);

    if check_only && output_file.is_some() {
        eprintln!("Error: --check does not write output");
        process::exit(1);
    }

    let input = read_input(input_path);
    let filename = input_path.unwrap_or(STDIN_NAME);
    tracing::debug!(input = filename, bytes = input.len(), "read input");

    if check_only {
        match parse_with_filename(&input, Some(filename)) {
            Ok(doc) => {
                tracing::debug!(entries = doc.len(), "check passed");
                println!("ok");
                return;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    // Nothing is written unless the whole translation succeeds.
    let output = match translate_with_filename(&input, Some(filename)) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "translation failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    write_text_output(&output, output_file);
}

/// Record the output path; a second one is a usage error.
fn set_output<'a>(output_file: &mut Option<&'a str>, path: &'a str) {
    if output_file.is_some() {
        eprintln!("Error: Multiple output paths not supported");
        process::exit(1);
    }
    *output_file = Some(path);
}

/// Install a stderr subscriber. `CFGYAML_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

/// Read all input as UTF-8, from a file or stdin.
fn read_input(input_path: Option<&str>) -> String {
    let raw_bytes: Vec<u8> = match input_path {
        Some(path) => match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buf
        }
    };

    match String::from_utf8(raw_bytes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: input is not valid UTF-8: {}", e);
            process::exit(1);
        }
    }
}

fn write_text_output(output: &str, output_file: Option<&str>) {
    match output_file {
        Some(path) if path != "-" => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("Error writing {}: {}", path, e);
                process::exit(1);
            }
            tracing::debug!(output = path, bytes = output.len(), "wrote yaml");
        }
        _ => print!("{}", output),
    }
}

fn print_help() {
    println!(
        "cfgyaml - translate CFG configuration source into YAML

USAGE:
    cfgyaml [OPTIONS] [OUTPUT]

ARGS:
    [OUTPUT]               Write YAML to this file (stdout if not provided or \"-\")

OPTIONS:
    -i, --input <FILE>     Read CFG source from FILE (stdin if not provided or \"-\")

    -o, --output <FILE>    Write YAML to FILE (same as the positional OUTPUT)

    --check                Check if input is valid (exit 0 if valid, 1 if invalid)

    -v, --verbose          Log pipeline progress to stderr
                           ({} overrides, e.g. {}=trace)

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Translate stdin into a YAML file
    cfgyaml config.yaml < config.cfg

    # Translate a file to stdout
    cfgyaml -i config.cfg

    # Validate without writing anything
    cfgyaml --check -i config.cfg
",
        LOG_ENV, LOG_ENV
    );
}
