//! The scan loop
//!
//!     A single left to right pass. Tokens accumulate into a [Pending] reference until a
//!     `,` or the end of input flushes it into a [Reference]. See [state](super::state)
//!     for how delimiters are interpreted.

use super::state::{transition, States, Target, Transition};
use super::tokens::{self, Delimiter};
use crate::bibleutils::books::BookCatalog;
use crate::bibleutils::catalogs::Catalogs;
use crate::bibleutils::error::ParseError;
use crate::bibleutils::forms::ReferenceForm;
use crate::bibleutils::reference::{BookRef, Reference};

/// Bounds read so far for the reference being accumulated.
#[derive(Debug, Default)]
struct Pending<'a> {
    st_book: Option<&'a str>,
    end_book: Option<&'a str>,
    st_ch: Option<u32>,
    end_ch: Option<u32>,
    st_vs: Option<u32>,
    end_vs: Option<u32>,
}

impl Pending<'_> {
    /// Clear `unit` and everything finer than it.
    fn reset_from(&mut self, unit: Target) {
        match unit {
            Target::Book => *self = Pending::default(),
            Target::Chapter => {
                self.st_ch = None;
                self.end_ch = None;
                self.st_vs = None;
                self.end_vs = None;
            }
            Target::Verse => {
                self.st_vs = None;
                self.end_vs = None;
            }
            _ => {}
        }
    }

    fn has_end(&self, unit: Target) -> bool {
        match unit {
            Target::Book => self.end_book.is_some(),
            Target::Chapter => self.end_ch.is_some(),
            Target::Verse => self.end_vs.is_some(),
            _ => false,
        }
    }

    fn numbers_mut(&mut self, unit: Target) -> (&mut Option<u32>, &mut Option<u32>) {
        match unit {
            Target::Chapter => (&mut self.st_ch, &mut self.end_ch),
            _ => (&mut self.st_vs, &mut self.end_vs),
        }
    }
}

pub(crate) struct ReferenceParser<'a> {
    books: &'a BookCatalog,
    /// Original input, echoed in errors.
    refs: &'a str,
    /// Input without trailing whitespace.
    text: &'a str,
    pos: usize,
    states: States,
    restart: Target,
    pending: Pending<'a>,
    parsed: Vec<Reference>,
}

impl<'a> ReferenceParser<'a> {
    pub fn new(catalogs: &'a Catalogs, refs: &'a str) -> Self {
        Self {
            books: catalogs.books(),
            refs,
            text: refs.trim_end(),
            pos: 0,
            states: States::start(),
            restart: Target::Book,
            pending: Pending::default(),
            parsed: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<Vec<Reference>, ParseError> {
        while self.pos < self.text.len() {
            match self.states.current {
                Target::Book => self.read_book()?,
                Target::Chapter | Target::Verse => self.read_number(self.states.current)?,
                Target::Delimiter => self.read_delimiter()?,
                Target::Next => self.resolve_next()?,
            }
        }

        // Whatever was read since the last `,` becomes the final reference, even when
        // the input stops right after a delimiter ("Gen 1:" is Genesis 1).
        if self.states.current != Target::Next {
            self.flush()?;
        } else if self.parsed.is_empty() {
            return Err(self.failed(self.pos));
        }
        Ok(self.parsed)
    }

    fn read_book(&mut self) -> Result<(), ParseError> {
        let (name, end) =
            tokens::book_at(self.text, self.pos).ok_or_else(|| self.failed(self.pos))?;
        if self.pending.st_book.is_none() {
            self.pending.st_book = Some(name);
        } else {
            self.pending.end_book = Some(name);
        }
        self.pos = end;
        self.states = self.states.advance(Target::Delimiter);
        Ok(())
    }

    fn read_number(&mut self, unit: Target) -> Result<(), ParseError> {
        let (value, end) =
            tokens::number_at(self.text, self.pos).ok_or_else(|| self.failed(self.pos))?;
        let (start, stop) = self.pending.numbers_mut(unit);
        if start.is_none() {
            *start = Some(value);
        } else {
            *stop = Some(value);
        }
        self.pos = end;
        self.states = self.states.advance(Target::Delimiter);
        Ok(())
    }

    fn read_delimiter(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let (delimiter, end) =
            tokens::delimiter_at(self.text, start).ok_or_else(|| self.failed(start))?;
        self.pos = end;

        match transition(self.states.previous, delimiter) {
            Transition::Emit { restart } => {
                self.flush()?;
                self.restart = restart;
                self.states = self.states.advance(Target::Next);
            }
            Transition::Read(target) => self.states = self.states.advance(target),
            Transition::Range(unit) => {
                if self.pending.has_end(unit) {
                    return Err(ParseError::DuplicateRangeDelimiter {
                        pos: self.char_pos(end),
                        refs: self.refs.to_string(),
                    });
                }
                self.states = self.states.advance(unit);
            }
            Transition::BadVerseTransition => {
                return Err(ParseError::InvalidVerseTransition {
                    pos: self.char_pos(end),
                    refs: self.refs.to_string(),
                })
            }
            Transition::Reject => return Err(self.failed(start)),
        }
        Ok(())
    }

    /// Decide what the token after a `,` (or at the very start) begins.
    ///
    /// A book name starts over completely. A number followed by `:` is always a new
    /// chapter, any other number continues at the restart unit. After a book level
    /// restart only a book is accepted.
    fn resolve_next(&mut self) -> Result<(), ParseError> {
        let unit = if self.book_ahead() {
            Target::Book
        } else if self.restart == Target::Book {
            return Err(self.failed(self.pos));
        } else {
            let (_, end) =
                tokens::number_at(self.text, self.pos).ok_or_else(|| self.failed(self.pos))?;
            match tokens::delimiter_at(self.text, end) {
                Some((Delimiter::Colon, _)) => Target::Chapter,
                _ => self.restart,
            }
        };

        self.pending.reset_from(unit);
        self.states.current = unit;
        Ok(())
    }

    /// Whether a book name starts at the current position. A leading digit makes the
    /// token ambiguous ("1Kings" or verse "2a"), so after a chapter or verse restart
    /// it only counts as a book when the name resolves.
    fn book_ahead(&self) -> bool {
        match tokens::book_at(self.text, self.pos) {
            None => false,
            Some(_) if self.restart == Target::Book => true,
            Some((name, _)) => {
                !name.starts_with(|c: char| c.is_ascii_digit())
                    || self.books.from_name(name).is_some()
            }
        }
    }

    fn flush(&mut self) -> Result<(), ParseError> {
        let reference = Reference::builder(ReferenceForm::Bibleutils)
            .books(
                self.resolve(self.pending.st_book),
                self.resolve(self.pending.end_book),
            )
            .chapters(self.pending.st_ch, self.pending.end_ch)
            .verses(self.pending.st_vs, self.pending.end_vs)
            .build()?;

        tracing::debug!(reference = %reference, "parsed reference");
        self.parsed.push(reference);
        Ok(())
    }

    fn resolve(&self, name: Option<&str>) -> Option<BookRef> {
        let name = name?;
        let book = self.books.from_name(name);
        if book.is_none() {
            tracing::debug!(book = name, refs = self.refs, "unresolved book name");
        }
        book.map(BookRef::Id)
    }

    fn failed(&self, byte_pos: usize) -> ParseError {
        ParseError::Failed {
            pos: self.char_pos(byte_pos),
            refs: self.refs.to_string(),
        }
    }

    fn char_pos(&self, byte_pos: usize) -> usize {
        self.refs[..byte_pos].chars().count()
    }
}
