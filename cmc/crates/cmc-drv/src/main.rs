//! cmscan - C-minus scanner CLI.
//!
//! Scans one source file and prints its token listing to stdout.
//! Diagnostics and logs go to stderr.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cmc_drv::{scan_file, Config, Format, Result, ScanError, ScanOptions};
use cmc_lex::OverlongPolicy;

/// cmscan - lexical scanner for the C- teaching language
#[derive(Parser, Debug)]
#[command(name = "cmscan")]
#[command(author = "C-minus Scanner Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of a C- source file", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "CMSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CMSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Token listing format (default: from config)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Maximum characters kept in an identifier or number
    #[arg(long)]
    max_lexeme: Option<NonZeroUsize>,

    /// Report overlong identifiers and numbers as errors instead of truncating
    #[arg(long)]
    reject_overlong: bool,

    /// Disable color output
    #[arg(long, env = "CMSCAN_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let options = scan_options(&cli, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = scan_file(&options, &mut out)?;
    out.flush()?;

    info!(
        tokens = summary.tokens,
        malformed = summary.errors.len(),
        "done"
    );
    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ScanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Applies command-line overrides on top of the loaded configuration.
fn scan_options(cli: &Cli, config: &Config) -> Result<ScanOptions> {
    let mut lexer = config.lexer_config()?;
    if let Some(max) = cli.max_lexeme {
        lexer.max_lexeme_len = max;
    }
    if cli.reject_overlong {
        lexer.overlong = OverlongPolicy::Reject;
    }

    Ok(ScanOptions {
        path: cli.file.clone(),
        format: cli.format.unwrap_or(config.output.format),
        lexer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["cmscan", "prog.cm"]);
        assert_eq!(cli.file, PathBuf::from("prog.cm"));
        assert!(cli.format.is_none());
        assert!(cli.max_lexeme.is_none());
        assert!(!cli.reject_overlong);
    }

    #[test]
    fn test_cli_requires_file() {
        let err = Cli::try_parse_from(["cmscan"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_cli_rejects_extra_file() {
        assert!(Cli::try_parse_from(["cmscan", "a.cm", "b.cm"]).is_err());
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["cmscan", "--format", "json", "prog.cm"]);
        assert_eq!(cli.format, Some(Format::Json));
    }

    #[test]
    fn test_cli_rejects_zero_max_lexeme() {
        assert!(Cli::try_parse_from(["cmscan", "--max-lexeme", "0", "prog.cm"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["cmscan", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::parse_from([
            "cmscan",
            "--max-lexeme",
            "8",
            "--reject-overlong",
            "--format",
            "json",
            "prog.cm",
        ]);
        let options = scan_options(&cli, &Config::default()).unwrap();
        assert_eq!(options.lexer.max_lexeme_len.get(), 8);
        assert_eq!(options.lexer.overlong, OverlongPolicy::Reject);
        assert_eq!(options.format, Format::Json);
    }

    #[test]
    fn test_config_used_without_overrides() {
        let cli = Cli::parse_from(["cmscan", "prog.cm"]);
        let mut config = Config::default();
        config.output.format = Format::Json;
        config.lexer.max_lexeme_len = 40;

        let options = scan_options(&cli, &config).unwrap();
        assert_eq!(options.format, Format::Json);
        assert_eq!(options.lexer.max_lexeme_len.get(), 40);
        assert_eq!(options.lexer.overlong, OverlongPolicy::Truncate);
    }
}
