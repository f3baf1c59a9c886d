//! Verse range expansion
//!
//!     Flattens "Gen 1:34-37" into "Gen 1:34", "Gen 1:35", "Gen 1:36", "Gen 1:37", the
//!     shape section based text APIs want. Expanding across chapters or books, or a whole
//!     chapter, needs chapter lengths that the catalogs do not have, so those fail.

use crate::bibleutils::error::NotImplementedError;
use crate::bibleutils::reference::Reference;

pub fn expand_refs(refs: &[Reference]) -> Result<Vec<Reference>, NotImplementedError> {
    let mut expanded = Vec::new();
    for reference in refs {
        if reference.end_book().is_some() {
            return Err(NotImplementedError::BookRange);
        }
        if reference.end_ch().is_some() {
            return Err(NotImplementedError::ChapterRange);
        }
        let first = reference.st_vs().ok_or(NotImplementedError::WholeChapter)?;
        let last = reference.end_vs().unwrap_or(first);

        expanded.extend((first..=last).map(|verse| {
            Reference::single_verse(
                reference.form(),
                reference.st_book().cloned(),
                reference.st_ch(),
                verse,
            )
        }));
    }
    Ok(expanded)
}
