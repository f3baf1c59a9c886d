//! Token patterns for reference strings
//!
//!     Books and numbers are matched with anchored regexes at the current scan position,
//!     since which one is expected depends on the parser state. Delimiters are lexed with
//!     logos: a delimiter is one of `,` `:` `-` with optional surrounding spaces, or a run
//!     of spaces on its own.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional leading digit followed by letters, e.g. "Exodus" or "1Kings". A trailing
/// abbreviation dot is consumed but is not part of the name.
static BOOK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]?[A-Za-z]+)\.?").unwrap());

/// Chapter and verse numbers.
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    #[regex(r" *, *")]
    Comma,
    #[regex(r" *: *")]
    Colon,
    #[regex(r" *- *")]
    Dash,
    #[regex(r" +")]
    Space,
}

/// Book name starting at `pos`, with the offset just past it.
pub(super) fn book_at(text: &str, pos: usize) -> Option<(&str, usize)> {
    let captures = BOOK_REGEX.captures(&text[pos..])?;
    let name = captures.get(1)?;
    let whole = captures.get(0)?;
    Some((name.as_str(), pos + whole.end()))
}

/// Number starting at `pos`, with the offset just past it. Values that do not fit a
/// `u32` do not match.
pub(super) fn number_at(text: &str, pos: usize) -> Option<(u32, usize)> {
    let found = NUMBER_REGEX.find(&text[pos..])?;
    let value = found.as_str().parse().ok()?;
    Some((value, pos + found.end()))
}

/// Delimiter starting at `pos`, with the offset just past it.
pub(super) fn delimiter_at(text: &str, pos: usize) -> Option<(Delimiter, usize)> {
    let mut lexer = Delimiter::lexer(&text[pos..]);
    match lexer.next() {
        Some(Ok(delimiter)) => Some((delimiter, pos + lexer.span().end)),
        _ => None,
    }
}
