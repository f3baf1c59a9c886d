//! Parse targets and the delimiter transition table
//!
//!     The parser always knows two things: what it expects to read next (`current`) and
//!     what it read last (`previous`). Delimiters are interpreted against `previous`: a
//!     `-` asks for another token of the same kind, a `:` is only valid after a chapter,
//!     a `,` closes the reference and restarts at the unit that was just read.
//!
//!     The table lives here, apart from tokenization, so every delimiter decision can be
//!     read (and tested) in one place.

use super::tokens::Delimiter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Book,
    Chapter,
    Verse,
    Delimiter,
    /// At the start or after a `,`: the next token decides where the new reference
    /// starts.
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct States {
    pub previous: Target,
    pub current: Target,
}

impl States {
    pub fn start() -> Self {
        States {
            previous: Target::Next,
            current: Target::Next,
        }
    }

    pub fn advance(self, next: Target) -> Self {
        States {
            previous: self.current,
            current: next,
        }
    }
}

/// What a delimiter means after a given read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Close the accumulated reference; a later restart happens at `restart`.
    Emit { restart: Target },
    /// Read a token of a different kind.
    Read(Target),
    /// Read the end bound of the unit just read.
    Range(Target),
    /// `:` after something other than a chapter.
    BadVerseTransition,
    /// The delimiter is not allowed here.
    Reject,
}

pub(crate) fn transition(previous: Target, delimiter: Delimiter) -> Transition {
    let is_unit = matches!(previous, Target::Book | Target::Chapter | Target::Verse);
    match delimiter {
        Delimiter::Comma if is_unit => Transition::Emit { restart: previous },
        Delimiter::Colon if previous == Target::Chapter => Transition::Read(Target::Verse),
        Delimiter::Colon => Transition::BadVerseTransition,
        Delimiter::Dash if is_unit => Transition::Range(previous),
        Delimiter::Space if previous == Target::Book => Transition::Read(Target::Chapter),
        _ => Transition::Reject,
    }
}
