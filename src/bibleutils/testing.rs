//! Fluent assertions for reference lists
//!
//!     Parser tests check many fields of many references. Written field by field they
//!     are long and easy to get subtly wrong, so tests go through [assert_refs] instead:
//!
//!     ```rust,ignore
//!     let refs = parse_refs("Gen 1:1-2,6", ReferenceForm::Bibleutils).unwrap();
//!
//!     assert_refs(&refs)
//!         .count(2)
//!         .item(0, |r| {
//!             r.book(BookId::Genesis).chapter(1).verses(1, Some(2));
//!         })
//!         .item(1, |r| {
//!             r.book(BookId::Genesis).chapter(1).verses(6, None);
//!         });
//!     ```
//!
//!     Failures name the reference index and print the reference, so a failing chain
//!     points straight at the offending item.

use crate::bibleutils::books::BookId;
use crate::bibleutils::forms::ReferenceForm;
use crate::bibleutils::reference::{BookRef, Reference};

/// Create an assertion builder for a list of references
pub fn assert_refs(refs: &[Reference]) -> RefsAssertion<'_> {
    RefsAssertion { refs }
}

pub struct RefsAssertion<'a> {
    refs: &'a [Reference],
}

impl<'a> RefsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.refs.len(),
            expected,
            "Expected {} references, found {}: {:?}",
            expected,
            self.refs.len(),
            self.refs.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
        self
    }

    pub fn item<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(ReferenceAssertion<'a>),
    {
        let reference = self.refs.get(index).unwrap_or_else(|| {
            panic!(
                "No reference at index {} (only {} references)",
                index,
                self.refs.len()
            )
        });
        check(ReferenceAssertion {
            reference,
            context: format!("refs[{}] = {:?}", index, reference.to_string()),
        });
        self
    }

    /// Run the same checks on every reference.
    pub fn all<F>(self, check: F) -> Self
    where
        F: Fn(ReferenceAssertion<'a>),
    {
        for (index, reference) in self.refs.iter().enumerate() {
            check(ReferenceAssertion {
                reference,
                context: format!("refs[{}] = {:?}", index, reference.to_string()),
            });
        }
        self
    }
}

pub struct ReferenceAssertion<'a> {
    reference: &'a Reference,
    context: String,
}

impl ReferenceAssertion<'_> {
    pub fn form(self, expected: ReferenceForm) -> Self {
        assert_eq!(self.reference.form(), expected, "{}: form", self.context);
        self
    }

    pub fn book(self, expected: BookId) -> Self {
        assert_eq!(
            self.reference.st_book(),
            Some(&BookRef::Id(expected)),
            "{}: starting book",
            self.context
        );
        self
    }

    pub fn book_name(self, expected: &str) -> Self {
        assert_eq!(
            self.reference.st_book().and_then(BookRef::name),
            Some(expected),
            "{}: starting book name",
            self.context
        );
        self
    }

    pub fn no_book(self) -> Self {
        assert_eq!(self.reference.st_book(), None, "{}: starting book", self.context);
        self
    }

    pub fn end_book(self, expected: BookId) -> Self {
        assert_eq!(
            self.reference.end_book(),
            Some(&BookRef::Id(expected)),
            "{}: ending book",
            self.context
        );
        self
    }

    pub fn end_book_name(self, expected: &str) -> Self {
        assert_eq!(
            self.reference.end_book().and_then(BookRef::name),
            Some(expected),
            "{}: ending book name",
            self.context
        );
        self
    }

    pub fn no_end_book(self) -> Self {
        assert_eq!(self.reference.end_book(), None, "{}: ending book", self.context);
        self
    }

    pub fn chapter(self, expected: u32) -> Self {
        assert_eq!(self.reference.st_ch(), Some(expected), "{}: starting chapter", self.context);
        self
    }

    pub fn chapters(self, start: u32, end: Option<u32>) -> Self {
        assert_eq!(self.reference.st_ch(), Some(start), "{}: starting chapter", self.context);
        assert_eq!(self.reference.end_ch(), end, "{}: ending chapter", self.context);
        self
    }

    pub fn no_chapter(self) -> Self {
        assert_eq!(self.reference.st_ch(), None, "{}: starting chapter", self.context);
        assert_eq!(self.reference.end_ch(), None, "{}: ending chapter", self.context);
        self
    }

    pub fn verse(self, expected: u32) -> Self {
        assert_eq!(self.reference.st_vs(), Some(expected), "{}: starting verse", self.context);
        self
    }

    pub fn verses(self, start: u32, end: Option<u32>) -> Self {
        assert_eq!(self.reference.st_vs(), Some(start), "{}: starting verse", self.context);
        assert_eq!(self.reference.end_vs(), end, "{}: ending verse", self.context);
        self
    }

    pub fn no_verse(self) -> Self {
        assert_eq!(self.reference.st_vs(), None, "{}: starting verse", self.context);
        assert_eq!(self.reference.end_vs(), None, "{}: ending verse", self.context);
        self
    }

    /// No end bound of any kind is set.
    pub fn single(self) -> Self {
        let r = self.reference;
        assert!(
            r.end_book().is_none() && r.end_ch().is_none() && r.end_vs().is_none(),
            "{}: expected no end bounds",
            self.context
        );
        self
    }

    pub fn no_sub_verses(self) -> Self {
        assert_eq!(self.reference.st_sub_vs(), None, "{}: starting sub-verse", self.context);
        assert_eq!(self.reference.end_sub_vs(), None, "{}: ending sub-verse", self.context);
        self
    }

    pub fn displays(self, expected: &str) -> Self {
        assert_eq!(self.reference.to_string(), expected, "{}: display", self.context);
        self
    }
}
