//! Reference string parsing
//!
//!     Turns strings like "Gen 1:1-2,6, Ex 17:3" into a list of [Reference]s in the
//!     internal BIBLEUTILS form.
//!
//! Grammar
//!
//!     ref_list     := ref (',' ref)*
//!     ref          := book_part (chapter_part)?
//!     book_part    := BOOK ('-' BOOK)?
//!     chapter_part := ' ' CH ('-' CH)? (verse_part)?
//!     verse_part   := ':' VS ('-' VS)?
//!
//!     BOOK is an optional leading digit followed by letters ("1Kings"), optionally ending
//!     in an abbreviation dot ("Ex."). CH and VS are digits. Delimiters may be surrounded
//!     by spaces.
//!
//!     A `,` restarts at the unit read last, so "Gen 1:1-2,6" continues in Genesis 1 and
//!     means verse 6, while "Exodus 12-15, 17-25" means chapters 17 to 25. A number
//!     followed by `:` after a `,` starts a new chapter ("Gen 1:1,2:23"), and a book name
//!     starts a new reference altogether.
//!
//! Books
//!
//!     Names resolve through [BookCatalog::from_name](crate::bibleutils::books::BookCatalog::from_name).
//!     A name that resolves to nothing leaves that bound empty; it is not a parse error.
//!
//! Errors
//!
//!     Parsing stops at the first problem, see [ParseError]. Positions are 0-based
//!     character offsets into the input.

mod engine;
mod state;
mod tokens;

pub use tokens::Delimiter;

use crate::bibleutils::catalogs::Catalogs;
use crate::bibleutils::error::ParseError;
use crate::bibleutils::forms::ReferenceForm;
use crate::bibleutils::reference::Reference;
use engine::ReferenceParser;

/// Parse a reference string with the standard catalogs.
///
/// The result is always in the BIBLEUTILS form whatever `form` asks for; use
/// [convert_refs](crate::bibleutils::conversion::convert_refs) to retarget it.
pub fn parse_refs(refs: &str, form: ReferenceForm) -> Result<Vec<Reference>, ParseError> {
    parse_refs_with(Catalogs::standard(), refs, form)
}

/// Parse a reference string against explicit catalogs.
pub fn parse_refs_with(
    catalogs: &Catalogs,
    refs: &str,
    form: ReferenceForm,
) -> Result<Vec<Reference>, ParseError> {
    if !form.is_internal() {
        tracing::debug!(requested = %form, "parser output is always BIBLEUTILS");
    }
    ReferenceParser::new(catalogs, refs).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibleutils::books::BookId;

    fn parse(refs: &str) -> Vec<Reference> {
        parse_refs(refs, ReferenceForm::Bibleutils).unwrap()
    }

    fn failure(refs: &str) -> String {
        parse_refs(refs, ReferenceForm::Bibleutils)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_book_only() {
        let r = parse("Exodus");
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].form(), ReferenceForm::Bibleutils);
        assert_eq!(r[0].st_book_id(), Some(BookId::Exodus));
        assert_eq!(r[0].end_book(), None);
        assert_eq!(r[0].st_ch(), None);
        assert_eq!(r[0].st_vs(), None);
    }

    #[test]
    fn test_output_form_is_always_internal() {
        let r = parse_refs("Mark 2", ReferenceForm::Etcbcg).unwrap();
        assert_eq!(r[0].form(), ReferenceForm::Bibleutils);
        assert_eq!(r[0].st_book_id(), Some(BookId::Mark));
    }

    #[test]
    fn test_unknown_book_is_not_an_error() {
        let r = parse("Hezekiah 3");
        assert_eq!(r[0].st_book(), None);
        assert_eq!(r[0].st_ch(), Some(3));
    }

    #[test]
    fn test_chapter_then_range_then_verse() {
        let r = parse("Gen 1-2:3");
        assert_eq!(r[0].st_ch(), Some(1));
        assert_eq!(r[0].end_ch(), Some(2));
        assert_eq!(r[0].st_vs(), Some(3));
    }

    #[test]
    fn test_out_of_order_range_propagates() {
        assert_eq!(failure("Gen 1:5-2"), "ending vs 2 is before the starting vs 5");
        assert_eq!(failure("Gen 3-1"), "ending ch 1 is before the starting ch 3");
    }

    #[test]
    fn test_numbered_book_after_verse() {
        let r = parse("Ex 17:3, 1Kings 2");
        assert_eq!(r.len(), 2);
        assert_eq!(r[1].st_book_id(), Some(BookId::FirstKings));
        assert_eq!(r[1].st_ch(), Some(2));
        assert_eq!(r[1].st_vs(), None);
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        let r = parse("Gen 1:1  ");
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].st_vs(), Some(1));
    }

    #[test]
    fn test_dangling_delimiters_flush_what_was_read() {
        let r = parse("Gen 1:");
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].st_ch(), Some(1));
        assert_eq!(r[0].st_vs(), None);

        let r = parse("Gen 1-");
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].st_ch(), Some(1));
        assert_eq!(r[0].end_ch(), None);

        let r = parse("Gen 1:1,");
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].st_vs(), Some(1));
    }

    #[test]
    fn test_nothing_to_parse() {
        assert_eq!(failure(""), "Parsing failed at pos 0 in ");
        assert_eq!(failure("   "), "Parsing failed at pos 0 in    ");
    }

    #[test]
    fn test_digit_led_token_after_comma_is_a_number() {
        assert_eq!(failure("Gen 1:1,2a"), "Parsing failed at pos 9 in Gen 1:1,2a");
        assert_eq!(failure("Gen 1,2b"), "Parsing failed at pos 7 in Gen 1,2b");
    }

    #[test]
    fn test_colon_after_book() {
        assert_eq!(
            failure("Gen:1"),
            "invalid chapter to verse transition at 4 in Gen:1"
        );
    }

    #[test]
    fn test_space_after_chapter_rejected() {
        assert_eq!(failure("Gen 1 2"), "Parsing failed at pos 5 in Gen 1 2");
    }

    #[test]
    fn test_position_counts_characters() {
        assert_eq!(failure("Gen 1:1 é"), "Parsing failed at pos 7 in Gen 1:1 é");
        assert_eq!(failure("Gen 1:é"), "Parsing failed at pos 6 in Gen 1:é");
    }
}
