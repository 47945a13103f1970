//! tablewright CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tablewright_cli::commands::generate::StatementKind;
use tablewright_cli::config::Config;
use tablewright_cli::error::CliError;
use tablewright_cli::output;

/// tablewright - MySQL DDL from a TOML table description
#[derive(Parser, Debug)]
#[command(name = "tablewright")]
#[command(author, version, about = "Generate MySQL DDL from tablewright.toml", long_about = None)]
struct Cli {
    /// Path to config file (default: tablewright.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new tablewright.toml configuration file
    Init,

    /// Print CREATE TABLE statements
    Create {
        /// Only render this table
        #[arg(short, long)]
        table: Option<String>,

        /// Write SQL to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print ALTER TABLE ... ADD COLUMN statements
    Alter {
        /// Only render this table
        #[arg(short, long)]
        table: Option<String>,

        /// Write SQL to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate configuration file
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so generated SQL on stdout stays clean
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init => {
            let path = cli
                .config
                .unwrap_or_else(|| tablewright_cli::commands::init::default_path().to_path_buf());
            tablewright_cli::commands::init::run(&path)
        }
        Command::Create { table, out } => {
            let config = load_config(cli.config.as_deref())?;
            tablewright_cli::commands::generate::run(
                &config,
                StatementKind::Create,
                table.as_deref(),
                out.as_deref(),
            )
        }
        Command::Alter { table, out } => {
            let config = load_config(cli.config.as_deref())?;
            tablewright_cli::commands::generate::run(
                &config,
                StatementKind::Alter,
                table.as_deref(),
                out.as_deref(),
            )
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref())?;
            tablewright_cli::commands::check::run(&config)
        }
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}
