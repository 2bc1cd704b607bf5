//! Command-line interface for mdlex
//! This binary tokenizes markup files and prints the token stream in different formats.
//!
//! Usage:
//!   mdlex `<path>` [--format `<format>`] [--config `<file>`]   - Tokenize a file (`-` reads stdin)
//!   mdlex --list-formats                                     - List all available output formats

use clap::{Arg, ArgAction, Command};
use mdlex::markdown::processor::{format_tokens, OutputFormat, ProcessingError};
use mdlex::Tokenizer;
use mdlex_config::{LoadError, Loader, MdlexConfig};
use std::io::{self, Read};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let matches = Command::new("mdlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting the token stream of markup files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the markup file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: simple)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config.log.level);

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    if let Err(e) = handle_tokenize_command(path, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Layer `mdlex.toml` from the working directory, then `--config`, then `--format`
fn load_config(
    config_path: Option<&String>,
    format: Option<&String>,
) -> Result<MdlexConfig, LoadError> {
    let mut loader = Loader::new().with_optional_file("mdlex.toml");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Install the log subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

/// Handle the tokenize command
fn handle_tokenize_command(path: &str, config: &MdlexConfig) -> Result<(), ProcessingError> {
    let format: OutputFormat = config.output.format.parse()?;
    let source = read_source(path)?;

    let tokens = Tokenizer::default().tokenize_spanned(&source);
    let output = format_tokens(&tokens, format, config.output.spans)?;

    println!("{}", output);
    Ok(())
}

fn read_source(path: &str) -> Result<String, ProcessingError> {
    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| ProcessingError::Io(format!("stdin: {}", e)))?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|e| ProcessingError::Io(format!("{}: {}", path, e)))
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
