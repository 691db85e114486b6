//! # codfis CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use codfis_cli::generate::{run_args, run_input, FromArgs};
use codfis_cli::open_builder;
use codfis_cli::output::OutputFormat;
use codfis_registry::RegistryConfig;

/// Italian tax code (codice fiscale) calculator.
///
/// Computes the 16-character code from name, surname, sex, date of birth,
/// and place of birth, read either from arguments or interactively.
#[derive(Parser, Debug)]
#[command(name = "codfis", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Place dataset file (YAML or JSON). Overrides CODFIS_PLACES_PATH.
    #[arg(long, global = true, value_name = "PATH")]
    places: Option<PathBuf>,

    /// Print the result as a JSON object.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read inputs from arguments.
    Args(FromArgs),

    /// Read inputs from stdin.
    Input,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // --places takes precedence over CODFIS_PLACES_PATH.
    let mut config = RegistryConfig::from_env();
    if let Some(path) = &cli.places {
        config = config.with_places_path(path);
    }

    let result = open_builder(&config).and_then(|builder| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let code = match &cli.command {
            Commands::Args(args) => run_args(args, &builder, format, &mut out),
            Commands::Input => {
                let stdin = io::stdin();
                let mut prompts = io::stderr();
                run_input(&mut stdin.lock(), &mut prompts, &builder, format, &mut out)
            }
        }?;
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
