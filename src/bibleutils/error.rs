//! Error types for catalog construction, parsing, conversion and expansion
//!
//!     Every failure in this crate is deterministic and fatal for the call that raised it:
//!     there is no recovery and no partial result. The message texts of [ParseError] are
//!     part of the public contract, callers (and tests) match on them verbatim.

use std::fmt;
use thiserror::Error;

/// Errors raised while building a catalog or selecting one for conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Two registry entries share the same value.
    #[error("duplicate value in supplied map at key {key} (value {value} is already used by {existing})")]
    DuplicateValue {
        key: String,
        existing: String,
        value: u32,
    },
    /// The same symbolic name was supplied twice.
    #[error("duplicate name {name} in supplied map")]
    DuplicateName { name: String },
    /// A versification table maps two names onto the same book.
    #[error(
        "duplicate values detected in {system} versification: forward map size={forward} reverse map size={reverse}"
    )]
    AmbiguousBookTable {
        system: String,
        forward: usize,
        reverse: usize,
    },
    /// No book table exists for the requested reference form.
    #[error("unsupported conversion form {form}")]
    UnsupportedForm { form: String },
    /// A symbol did not name any identifier of the given kind.
    #[error("unknown {kind} '{name}'")]
    UnknownIdentifier { kind: &'static str, name: String },
}

/// The unit whose bounds were found out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeUnit {
    Chapter,
    Verse,
}

impl fmt::Display for RangeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeUnit::Chapter => write!(f, "ch"),
            RangeUnit::Verse => write!(f, "vs"),
        }
    }
}

/// A reference was built with its end bound before its start bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ending {unit} {end} is before the starting {unit} {start}")]
pub struct RangeOrderError {
    pub unit: RangeUnit,
    pub start: u32,
    pub end: u32,
}

/// Failures of the reference parser.
///
/// Positions are 0-based character offsets into the original input, which is echoed
/// back in `refs`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expected token or delimiter did not match at `pos`.
    #[error("Parsing failed at pos {pos} in {refs}")]
    Failed { pos: usize, refs: String },
    /// A second `-` inside a unit that already holds a range.
    #[error("invalid \"-\" delimiter at {pos} in {refs}")]
    DuplicateRangeDelimiter { pos: usize, refs: String },
    /// A `:` that does not follow a chapter.
    #[error("invalid chapter to verse transition at {pos} in {refs}")]
    InvalidVerseTransition { pos: usize, refs: String },
    #[error(transparent)]
    RangeOrder(#[from] RangeOrderError),
}

impl ParseError {
    /// Offset reported by the error, if it carries one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Failed { pos, .. }
            | ParseError::DuplicateRangeDelimiter { pos, .. }
            | ParseError::InvalidVerseTransition { pos, .. } => Some(*pos),
            ParseError::RangeOrder(_) => None,
        }
    }
}

/// Expansions that need versification knowledge the catalogs do not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotImplementedError {
    #[error("reference extends over more than one book: book range expansion not yet implemented")]
    BookRange,
    #[error(
        "reference extends over more than one chapter: chapter range expansion not yet implemented"
    )]
    ChapterRange,
    #[error("reference has no starting verse: whole chapter expansion not yet implemented")]
    WholeChapter,
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    RangeOrder(#[from] RangeOrderError),
    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),
}
