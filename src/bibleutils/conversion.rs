//! Conversion between reference forms
//!
//!     Conversions always pivot through the internal form: internal references are
//!     renamed into an external system through its book table, external references are
//!     mapped back to canonical ids through theirs. Only the book bounds change.
//!
//!     Converting directly between two external forms is not supported. Such references
//!     are dropped from the output (with a warning in the log); convert to BIBLEUTILS
//!     first and then to the other form.

use crate::bibleutils::catalogs::Catalogs;
use crate::bibleutils::error::ConfigurationError;
use crate::bibleutils::forms::ReferenceForm;
use crate::bibleutils::reference::{BookRef, Reference};
use crate::bibleutils::versification::Versification;

/// Convert references to `target` with the standard catalogs.
pub fn convert_refs(
    refs: &[Reference],
    target: ReferenceForm,
) -> Result<Vec<Reference>, ConfigurationError> {
    convert_refs_with(Catalogs::standard(), refs, target)
}

/// Convert references to `target` against explicit catalogs.
pub fn convert_refs_with(
    catalogs: &Catalogs,
    refs: &[Reference],
    target: ReferenceForm,
) -> Result<Vec<Reference>, ConfigurationError> {
    let target_table = if target.is_internal() {
        None
    } else {
        Some(table_for(catalogs, target)?)
    };

    let mut converted = Vec::with_capacity(refs.len());
    for reference in refs {
        let source = reference.form();
        match (source.is_internal(), target_table) {
            (true, Some(table)) => converted.push(to_external(reference, target, table)),
            (true, None) => converted.push(reference.clone()),
            (false, None) => {
                let table = table_for(catalogs, source)?;
                converted.push(to_internal(reference, table));
            }
            (false, Some(_)) => {
                tracing::warn!(
                    from = %source,
                    to = %target,
                    reference = %reference,
                    "direct conversion between external forms is unsupported, reference dropped"
                );
            }
        }
    }
    Ok(converted)
}

fn table_for(catalogs: &Catalogs, form: ReferenceForm) -> Result<&Versification, ConfigurationError> {
    catalogs
        .versification_for(form)
        .ok_or_else(|| ConfigurationError::UnsupportedForm {
            form: form.symbol().to_string(),
        })
}

fn to_external(reference: &Reference, target: ReferenceForm, table: &Versification) -> Reference {
    let rename = |book: Option<&BookRef>| {
        book.and_then(BookRef::id)
            .and_then(|id| table.book_name(id))
            .map(|name| BookRef::Name(name.to_string()))
    };
    reference.retarget(
        target,
        rename(reference.st_book()),
        rename(reference.end_book()),
    )
}

fn to_internal(reference: &Reference, table: &Versification) -> Reference {
    let resolve = |book: Option<&BookRef>| {
        book.and_then(BookRef::name)
            .and_then(|name| table.book_id(name))
            .map(BookRef::Id)
    };
    reference.retarget(
        ReferenceForm::Bibleutils,
        resolve(reference.st_book()),
        resolve(reference.end_book()),
    )
}
