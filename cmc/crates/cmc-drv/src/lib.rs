//! cmc-drv - Scanner Driver
//!
//! Opens C-minus sources, pulls tokens from the lexer until end of input,
//! and renders the token listing.

pub mod config;
pub mod error;
pub mod report;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use cmc_lex::{LexError, Lexer, LexerConfig};
use tracing::{debug, info};

pub use config::Config;
pub use error::{Result, ScanError};
pub use report::{Format, TokenRecord};

/// Settings for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Source file to scan.
    pub path: PathBuf,
    /// Token listing format.
    pub format: Format,
    /// Lexer settings.
    pub lexer: LexerConfig,
}

impl ScanOptions {
    /// Options for `path` with the default format and lexer settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: Format::default(),
            lexer: LexerConfig::default(),
        }
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Tokens produced, including the final `ENDFILE`.
    pub tokens: usize,
    /// Malformed tokens, in input order.
    pub errors: Vec<LexError>,
}

/// Opens `options.path` and writes its token listing to `out`.
///
/// The file is closed when this returns.
pub fn scan_file<W: Write>(options: &ScanOptions, out: &mut W) -> Result<ScanSummary> {
    let file = File::open(&options.path).map_err(|source| ScanError::Open {
        path: options.path.clone(),
        source,
    })?;
    info!(path = %options.path.display(), "scanning");
    scan_reader(BufReader::new(file), options, out)
}

/// Scans `reader` and writes its token listing to `out`.
///
/// `options.path` is only used for display and error messages.
pub fn scan_reader<R: BufRead, W: Write>(
    reader: R,
    options: &ScanOptions,
    out: &mut W,
) -> Result<ScanSummary> {
    let mut lexer = Lexer::with_config(reader, options.lexer);
    let tokens = match options.format {
        Format::Text => write_text(&mut lexer, &options.path, out)?,
        Format::Json => write_json(&mut lexer, out)?,
    };

    if let Some(source) = lexer.take_io_error() {
        return Err(ScanError::Read {
            path: options.path.clone(),
            source,
        });
    }

    let summary = ScanSummary {
        tokens,
        errors: lexer.errors().to_vec(),
    };
    info!(
        tokens = summary.tokens,
        malformed = summary.errors.len(),
        "scan complete"
    );
    Ok(summary)
}

fn write_text<R: BufRead, W: Write>(
    lexer: &mut Lexer<R>,
    path: &Path,
    out: &mut W,
) -> Result<usize> {
    report::write_header(out, path)?;
    let mut count = 0;
    loop {
        let token = lexer.next_token();
        debug!(%token, "token");
        report::write_token(out, &token)?;
        count += 1;
        if token.kind.is_eof() {
            break;
        }
    }
    report::write_footer(out)?;
    Ok(count)
}

fn write_json<R: BufRead, W: Write>(lexer: &mut Lexer<R>, out: &mut W) -> Result<usize> {
    let records: Vec<TokenRecord> = lexer
        .collect_all()
        .into_iter()
        .map(TokenRecord::from)
        .collect();
    report::write_json(out, &records)?;
    Ok(records.len())
}
