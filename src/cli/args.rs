use crate::constants::{exit_codes, verbosity, DEFAULT_FORMAT};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Shape of the log lines written to stderr.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq, Eq, Default)]
#[value(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        };
        write!(f, "{s}")
    }
}

/// recipedex - builds a recipe index note for a markdown vault.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate recipeindex.md from the recipe notes of a vault.
    Generate(GenerateArgs),
    /// Print the version number.
    Version,
}

/// Arguments of the `generate` command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Vault directory containing the markdown notes.
    #[arg(long = "basedir", value_name = "DIR")]
    pub base_dir: PathBuf,

    /// Output format: `sections` or `table`.
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Print the index instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::MissingSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
