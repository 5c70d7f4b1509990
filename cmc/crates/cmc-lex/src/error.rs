//! Lexical error classification.
//!
//! Malformed input never aborts the scan: the lexer emits an `ERROR` token
//! and records one of these values next to it.

use thiserror::Error;

/// A malformed-token report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("line {line}: unexpected character '{ch}'")]
    UnexpectedChar { ch: char, line: u32 },

    /// `!` not followed by `=`.
    #[error("line {line}: '!' must be followed by '='")]
    IncompleteOperator { line: u32 },

    /// `/*` without a closing `*/` before end of input.
    #[error("line {line}: end of input inside block comment")]
    UnterminatedComment { line: u32 },

    /// An identifier or number longer than the configured maximum.
    #[error("line {line}: lexeme exceeds {max} characters")]
    LexemeTooLong { line: u32, max: usize },
}

impl LexError {
    /// Returns the line the error was reported on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedChar { line, .. }
            | LexError::IncompleteOperator { line }
            | LexError::UnterminatedComment { line }
            | LexError::LexemeTooLong { line, .. } => *line,
        }
    }
}
