//! The catalog set shared by parsing and conversion
//!
//!     [Catalogs] owns every registry and book table. It is built once, validated as a
//!     whole, and then only read. Callers that want full control build their own with
//!     [Catalogs::new] and pass it by reference to the `*_with` operations; everyone else
//!     uses [Catalogs::standard], a lazily built process-wide instance.

use crate::bibleutils::books::BookCatalog;
use crate::bibleutils::error::ConfigurationError;
use crate::bibleutils::forms::{ReferenceForm, VersificationId};
use crate::bibleutils::identifier::Identifier;
use crate::bibleutils::versification::{Versification, ETCBCG_BOOKS, ETCBCH_BOOKS};
use once_cell::sync::Lazy;

static STANDARD: Lazy<Catalogs> =
    Lazy::new(|| Catalogs::new().expect("built-in catalog tables are consistent"));

#[derive(Debug, Clone)]
pub struct Catalogs {
    books: BookCatalog,
    versification_ids: Identifier,
    reference_forms: Identifier,
    versifications: Vec<Versification>,
}

impl Catalogs {
    /// Build and validate the built-in catalogs.
    pub fn new() -> Result<Self, ConfigurationError> {
        Ok(Self {
            books: BookCatalog::new()?,
            versification_ids: VersificationId::registry()?,
            reference_forms: ReferenceForm::registry()?,
            versifications: vec![
                Versification::new(VersificationId::Etcbch, ETCBCH_BOOKS)?,
                Versification::new(VersificationId::Etcbcg, ETCBCG_BOOKS)?,
            ],
        })
    }

    /// The shared built-in catalogs.
    pub fn standard() -> &'static Catalogs {
        &STANDARD
    }

    pub fn books(&self) -> &BookCatalog {
        &self.books
    }

    pub fn versification_ids(&self) -> &Identifier {
        &self.versification_ids
    }

    pub fn reference_forms(&self) -> &Identifier {
        &self.reference_forms
    }

    /// Book table of a versification system, if one is defined.
    pub fn versification(&self, vid: VersificationId) -> Option<&Versification> {
        self.versifications.iter().find(|v| v.vid() == vid)
    }

    /// Book table used by a reference form. `None` for the internal form and for forms
    /// whose system has no table.
    pub fn versification_for(&self, form: ReferenceForm) -> Option<&Versification> {
        form.versification().and_then(|vid| self.versification(vid))
    }

    pub fn versifications(&self) -> impl Iterator<Item = &Versification> {
        self.versifications.iter()
    }
}
