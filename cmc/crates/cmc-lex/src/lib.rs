//! cmc-lex - Lexical Scanner for the C-minus Teaching Language
//!
//! This crate turns a C-minus source stream into a sequence of classified,
//! line-tagged tokens for a downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use cmc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_bytes(b"int x;");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Int);
//! assert_eq!(lexer.next_token().kind, TokenKind::Id);
//! assert_eq!(lexer.next_token().kind, TokenKind::Semi);
//! assert_eq!(lexer.next_token().kind, TokenKind::EndFile);
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Byte source with one character of lookahead and pushback
//! - [`lexer`] - Tokenizer built on the source
//! - [`token`] - Token and token kind definitions
//! - [`chars`] - Character classification
//! - [`error`] - Lexical error classification
//!
//! # Token Categories
//!
//! ## Reserved Words
//!
//! `else`, `if`, `int`, `return`, `void`, `while` (case-sensitive)
//!
//! ## Identifiers and Numbers
//!
//! - **Identifier**: `[a-zA-Z][a-zA-Z0-9]*` (no underscore)
//! - **Number**: `[0-9]+`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `<`, `<=`, `>`, `>=`, `==`, `!=`
//! - **Assignment**: `=`
//!
//! ## Punctuation
//!
//! `;`, `,`, `(`, `)`, `[`, `]`, `{`, `}`
//!
//! ## Comments
//!
//! Block comments `/* ... */`, not nested.
//!
//! ## Special
//!
//! - **ENDFILE**: end of input, returned forever once reached
//! - **ERROR**: unknown character, lone `!`, unterminated comment

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

pub use error::LexError;
pub use lexer::{tokenize, Lexer, LexerConfig, OverlongPolicy, DEFAULT_MAX_LEXEME_LEN};
pub use source::Source;
pub use token::{reserved_word, Token, TokenKind};
