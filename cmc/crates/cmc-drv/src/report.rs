//! Token listing output.
//!
//! The text listing prints one line per token:
//!
//! ```text
//! Line 3: LPAREN       -> "("
//! ```

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use cmc_lex::Token;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Width the token kind name is padded to.
const KIND_WIDTH: usize = 12;

/// Output format for the token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One human-readable line per token, framed by a header and footer.
    #[default]
    Text,
    /// A single JSON array of token records.
    Json,
}

/// Serializable form of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Line of the token's first character.
    pub line: u32,
    /// Display name of the token kind.
    pub kind: String,
    /// Matched text.
    pub lexeme: String,
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            line: token.line,
            kind: token.kind.name().to_string(),
            lexeme: token.lexeme,
        }
    }
}

/// Renders one token listing line, without the trailing newline.
pub fn format_token(token: &Token) -> String {
    format!(
        "Line {}: {:<width$} -> \"{}\"",
        token.line,
        token.kind.name(),
        token.lexeme,
        width = KIND_WIDTH
    )
}

/// Writes the banner printed before the first token.
pub fn write_header<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "=== C- Scanner ===")?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out)
}

/// Writes one token listing line.
pub fn write_token<W: Write>(out: &mut W, token: &Token) -> io::Result<()> {
    writeln!(out, "{}", format_token(token))
}

/// Writes the banner printed after the end-of-input token.
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Scan complete ===")
}

/// Writes the whole token stream as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, records: &[TokenRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmc_lex::TokenKind;

    #[test]
    fn test_format_token_pads_kind() {
        let token = Token::new(TokenKind::Id, "gcd", 7);
        assert_eq!(format_token(&token), "Line 7: ID           -> \"gcd\"");
    }

    #[test]
    fn test_format_token_long_kind() {
        let token = Token::new(TokenKind::LBracket, "[", 1);
        assert_eq!(format_token(&token), "Line 1: LBRACKET     -> \"[\"");
    }

    #[test]
    fn test_format_end_of_input() {
        let token = Token::new(TokenKind::EndFile, "EOF", 12);
        assert_eq!(format_token(&token), "Line 12: ENDFILE      -> \"EOF\"");
    }

    #[test]
    fn test_header_and_footer() {
        let mut out = Vec::new();
        write_header(&mut out, Path::new("prog.cm")).unwrap();
        write_token(&mut out, &Token::new(TokenKind::Semi, ";", 1)).unwrap();
        write_footer(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== C- Scanner ===\nFile: prog.cm\n\nLine 1: SEMI         -> \";\"\n\n=== Scan complete ===\n"
        );
    }

    #[test]
    fn test_json_records() {
        let records: Vec<TokenRecord> = vec![
            Token::new(TokenKind::Return, "return", 2).into(),
            Token::new(TokenKind::EndFile, "EOF", 2).into(),
        ];
        let mut out = Vec::new();
        write_json(&mut out, &records).unwrap();

        let parsed: Vec<TokenRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, records);
        assert_eq!(parsed[0].kind, "RETURN");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("json", true), Ok(Format::Json));
        assert_eq!(Format::default(), Format::Text);
    }
}
