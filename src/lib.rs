//! # bibleutils
//!
//! Parses biblical text references ("Gen 1:1-2,6, Ex 17:3"), converts them between
//! versification systems and expands verse ranges into single verses.
//!
//! ## Testing
//!
//! Reference lists are checked with the fluent assertions in the
//! [testing module](bibleutils::testing).

pub mod bibleutils;

pub use bibleutils::books::{BookCatalog, BookId, Section};
pub use bibleutils::catalogs::Catalogs;
pub use bibleutils::conversion::{convert_refs, convert_refs_with};
pub use bibleutils::error::{
    ConfigurationError, Error, NotImplementedError, ParseError, RangeOrderError, RangeUnit,
};
pub use bibleutils::expansion::expand_refs;
pub use bibleutils::forms::{ReferenceForm, VersificationId};
pub use bibleutils::identifier::Identifier;
pub use bibleutils::parsing::{parse_refs, parse_refs_with};
pub use bibleutils::reference::{BookRef, Reference, ReferenceBuilder};
pub use bibleutils::versification::Versification;
