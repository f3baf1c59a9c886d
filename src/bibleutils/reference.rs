//! The reference value type
//!
//!     A [Reference] describes one contiguous span of text: an optional book range, an
//!     optional chapter range and an optional verse range, expressed in a given
//!     [ReferenceForm]. References are validated when built and never change afterwards;
//!     parsing, conversion and expansion each produce new values.
//!
//!     Sub-verse bounds are carried through unchanged but are reserved: nothing parses,
//!     validates or expands them yet.

use crate::bibleutils::books::BookId;
use crate::bibleutils::error::{RangeOrderError, RangeUnit};
use crate::bibleutils::forms::ReferenceForm;
use serde::Serialize;
use std::fmt;

/// A book bound: a canonical id in the internal form, an external name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookRef {
    Id(BookId),
    Name(String),
}

impl BookRef {
    pub fn id(&self) -> Option<BookId> {
        match self {
            BookRef::Id(id) => Some(*id),
            BookRef::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            BookRef::Id(_) => None,
            BookRef::Name(name) => Some(name.as_str()),
        }
    }
}

impl From<BookId> for BookRef {
    fn from(id: BookId) -> Self {
        BookRef::Id(id)
    }
}

impl From<&str> for BookRef {
    fn from(name: &str) -> Self {
        BookRef::Name(name.to_string())
    }
}

impl From<String> for BookRef {
    fn from(name: String) -> Self {
        BookRef::Name(name)
    }
}

impl fmt::Display for BookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookRef::Id(id) => f.write_str(id.symbol()),
            BookRef::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    form: ReferenceForm,
    st_book: Option<BookRef>,
    end_book: Option<BookRef>,
    st_ch: Option<u32>,
    end_ch: Option<u32>,
    st_vs: Option<u32>,
    end_vs: Option<u32>,
    st_sub_vs: Option<char>,
    end_sub_vs: Option<char>,
}

impl Reference {
    pub fn builder(form: ReferenceForm) -> ReferenceBuilder {
        ReferenceBuilder {
            reference: Reference {
                form,
                st_book: None,
                end_book: None,
                st_ch: None,
                end_ch: None,
                st_vs: None,
                end_vs: None,
                st_sub_vs: None,
                end_sub_vs: None,
            },
        }
    }

    /// A reference to exactly one verse. Cannot violate range order.
    pub(crate) fn single_verse(
        form: ReferenceForm,
        book: Option<BookRef>,
        chapter: Option<u32>,
        verse: u32,
    ) -> Self {
        let mut reference = Reference::builder(form).reference;
        reference.st_book = book;
        reference.st_ch = chapter;
        reference.st_vs = Some(verse);
        reference
    }

    /// Same span with different book bounds, in another form.
    pub(crate) fn retarget(
        &self,
        form: ReferenceForm,
        st_book: Option<BookRef>,
        end_book: Option<BookRef>,
    ) -> Self {
        Reference {
            form,
            st_book,
            end_book,
            ..self.clone()
        }
    }

    pub fn form(&self) -> ReferenceForm {
        self.form
    }

    pub fn st_book(&self) -> Option<&BookRef> {
        self.st_book.as_ref()
    }

    pub fn end_book(&self) -> Option<&BookRef> {
        self.end_book.as_ref()
    }

    pub fn st_book_id(&self) -> Option<BookId> {
        self.st_book.as_ref().and_then(BookRef::id)
    }

    pub fn end_book_id(&self) -> Option<BookId> {
        self.end_book.as_ref().and_then(BookRef::id)
    }

    pub fn st_ch(&self) -> Option<u32> {
        self.st_ch
    }

    pub fn end_ch(&self) -> Option<u32> {
        self.end_ch
    }

    pub fn st_vs(&self) -> Option<u32> {
        self.st_vs
    }

    pub fn end_vs(&self) -> Option<u32> {
        self.end_vs
    }

    pub fn st_sub_vs(&self) -> Option<char> {
        self.st_sub_vs
    }

    pub fn end_sub_vs(&self) -> Option<char> {
        self.end_sub_vs
    }
}

/// Renders `BOOK[-BOOK][ CH[-CH]][:VS[-VS]]`.
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_book = self.st_book.is_some() || self.end_book.is_some();
        if let Some(book) = &self.st_book {
            write!(f, "{}", book)?;
        }
        if let Some(book) = &self.end_book {
            write!(f, "-{}", book)?;
        }
        if let Some(ch) = self.st_ch {
            if has_book {
                f.write_str(" ")?;
            }
            write!(f, "{}", ch)?;
            if let Some(end) = self.end_ch {
                write!(f, "-{}", end)?;
            }
        }
        if let Some(vs) = self.st_vs {
            write!(f, ":{}", vs)?;
            if let Some(sub) = self.st_sub_vs {
                write!(f, "{}", sub)?;
            }
            if let Some(end) = self.end_vs {
                write!(f, "-{}", end)?;
                if let Some(sub) = self.end_sub_vs {
                    write!(f, "{}", sub)?;
                }
            }
        }
        Ok(())
    }
}

/// Collects bounds and validates them in [ReferenceBuilder::build].
#[derive(Debug, Clone)]
pub struct ReferenceBuilder {
    reference: Reference,
}

impl ReferenceBuilder {
    pub fn book(mut self, book: impl Into<BookRef>) -> Self {
        self.reference.st_book = Some(book.into());
        self
    }

    pub fn end_book(mut self, book: impl Into<BookRef>) -> Self {
        self.reference.end_book = Some(book.into());
        self
    }

    pub fn books(mut self, start: Option<BookRef>, end: Option<BookRef>) -> Self {
        self.reference.st_book = start;
        self.reference.end_book = end;
        self
    }

    pub fn chapter(mut self, chapter: u32) -> Self {
        self.reference.st_ch = Some(chapter);
        self
    }

    pub fn end_chapter(mut self, chapter: u32) -> Self {
        self.reference.end_ch = Some(chapter);
        self
    }

    pub fn chapters(mut self, start: Option<u32>, end: Option<u32>) -> Self {
        self.reference.st_ch = start;
        self.reference.end_ch = end;
        self
    }

    pub fn verse(mut self, verse: u32) -> Self {
        self.reference.st_vs = Some(verse);
        self
    }

    pub fn end_verse(mut self, verse: u32) -> Self {
        self.reference.end_vs = Some(verse);
        self
    }

    pub fn verses(mut self, start: Option<u32>, end: Option<u32>) -> Self {
        self.reference.st_vs = start;
        self.reference.end_vs = end;
        self
    }

    pub fn sub_verses(mut self, start: Option<char>, end: Option<char>) -> Self {
        self.reference.st_sub_vs = start;
        self.reference.end_sub_vs = end;
        self
    }

    /// Check range order and produce the reference.
    pub fn build(self) -> Result<Reference, RangeOrderError> {
        let r = &self.reference;
        if let (Some(start), Some(end)) = (r.st_ch, r.end_ch) {
            if end < start {
                return Err(RangeOrderError {
                    unit: RangeUnit::Chapter,
                    start,
                    end,
                });
            }
        }
        if let (Some(start), Some(end)) = (r.st_vs, r.end_vs) {
            if end < start {
                return Err(RangeOrderError {
                    unit: RangeUnit::Verse,
                    start,
                    end,
                });
            }
        }
        Ok(self.reference)
    }
}
