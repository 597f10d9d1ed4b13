//! bcc - lexes a bc source file and prints its tokens.
//!
//! Settings come from `bcc.toml` when one is found; command-line flags
//! override them.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bcc_drv::{Config, OutputFormat, Session};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Lexical analyser for bc sources
///
/// Prints one line per token: the token code, then its text in backticks.
/// Stops with a non-zero exit status at the first lexical error.
#[derive(Parser, Debug)]
#[command(name = "bcc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyser for bc sources", long_about = None)]
struct Cli {
    /// Source file to lex [default: main.bc]
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "BCC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "BCC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "BCC_NO_COLOR")]
    no_color: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the end-of-file token
    #[arg(long)]
    include_eof: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(file) = &self.file {
            config.source = file.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.verbose |= self.verbose;
        config.output.include_eof |= self.include_eof;
        config
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.apply(load_config(cli.config.as_deref())?);
    init_logging(config.verbose, cli.no_color)?;

    let session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.run(&mut out)?;
    out.flush()?;

    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbose flag when set. Logs go to
/// stderr so they never mix with the token stream.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi(no_color, io::stderr().is_terminal()))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Colored logs only when asked for and stderr is a terminal.
fn use_ansi(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    config.context("failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["bcc"]);
        assert_eq!(cli.file, None);
        assert_eq!(cli.format, None);
        assert!(!cli.include_eof);
    }

    #[test]
    fn test_cli_parse_file_and_format() {
        let cli = Cli::parse_from(["bcc", "-f", "json", "prog.bc"]);
        assert_eq!(cli.file, Some(PathBuf::from("prog.bc")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["bcc", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::parse_from(["bcc", "--include-eof", "--format", "text", "other.bc"]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;

        let config = cli.apply(config);
        assert_eq!(config.source, PathBuf::from("other.bc"));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.include_eof);
    }

    #[test]
    fn test_use_ansi() {
        assert!(use_ansi(false, true));
        assert!(!use_ansi(true, true));
        assert!(!use_ansi(false, false));
    }

    #[test]
    fn test_apply_keeps_config_values() {
        let cli = Cli::parse_from(["bcc"]);
        let mut config = Config::default();
        config.source = PathBuf::from("from_file.bc");
        config.verbose = true;

        let config = cli.apply(config);
        assert_eq!(config.source, PathBuf::from("from_file.bc"));
        assert!(config.verbose);
    }
}
