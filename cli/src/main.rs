mod definition;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use getopt_long_core::{OptionTable, ParseResult};
use tracing::{Level, info};

use crate::definition::{Overrides, TableDefinition};

/// Output format for parse results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "getopt-long")]
#[command(about = "Classify an argument vector against a declared option table")]
struct Cli {
    /// Log parser activity to stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an argument vector and print the result.
    Parse(ParseArgs),
    /// Validate a table definition and print its short option string.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Table definition file (YAML, or JSON with a .json extension).
    #[arg(long)]
    table: PathBuf,
    /// Recognize options after operands (GNU ordering).
    #[arg(long)]
    permute: bool,
    /// Require exact long option names.
    #[arg(long)]
    no_abbrev: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Argument vector to classify, starting with the program name.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Table definition file (YAML, or JSON with a .json extension).
    #[arg(long)]
    table: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load_table(path: &Path, overrides: Overrides) -> Result<OptionTable, String> {
    let definition = TableDefinition::load(path)
        .map_err(|err| format!("Failed to load table '{}': {err}", path.display()))?;
    let table = definition
        .into_table(overrides)
        .map_err(|err| format!("Table '{}' is not usable: {err}", path.display()))?;
    info!(path = %path.display(), options = table.len(), "loaded option table");
    Ok(table)
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let table = load_table(
        &args.table,
        Overrides {
            permute: args.permute,
            no_abbreviations: args.no_abbrev,
        },
    )?;

    let program = args.argv.first().map(String::as_str).unwrap_or("getopt-long");
    let parsed = table.parse(&args.argv).map_err(|err| match err.index() {
        Some(index) => format!("{program}: {err} (argument {index})"),
        None => format!("{program}: {err}"),
    })?;

    println!("{}", render(&parsed, args.format)?);
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let table = load_table(&args.table, Overrides::default())?;
    println!("{}", table.optstring());
    Ok(())
}

fn render(parsed: &ParseResult, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(parsed)
            .map_err(|err| format!("Failed to serialize result: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(parsed)
            .map_err(|err| format!("Failed to serialize result: {err}")),
    }
}
