//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, configuration and dispatch
//! - `comment` - Whitespace and block comment skipping
//! - `identifier` - Identifier and reserved word lexing
//! - `number` - Integer literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{tokenize, Lexer, LexerConfig, OverlongPolicy, DEFAULT_MAX_LEXEME_LEN};
