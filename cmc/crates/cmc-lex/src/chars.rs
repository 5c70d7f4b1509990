//! Character classification for the C-minus scanner.
//!
//! C-minus is defined over plain ASCII. These predicates work on raw bytes
//! so the scanner never has to decode its input.

/// Checks if a byte is whitespace.
///
/// Matches space, tab, newline, vertical tab, form feed and carriage return.
///
/// # Example
///
/// ```
/// use cmc_lex::chars::is_space;
///
/// assert!(is_space(b' '));
/// assert!(is_space(b'\x0B'));
/// assert!(!is_space(b'a'));
/// ```
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r')
}

/// Checks if a byte can start an identifier.
///
/// Only ASCII letters qualify; underscores are not part of the language.
///
/// # Example
///
/// ```
/// use cmc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start(b'x'));
/// assert!(!is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if a byte can continue an identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Renders a byte as the character it stands for.
///
/// ASCII maps to itself; any other byte maps to the Latin-1 character with
/// the same value.
#[inline]
pub fn byte_to_char(b: u8) -> char {
    char::from(b)
}
