//! Integration tests for reference string parsing
//!
//! Successful parses are checked field by field with assert_refs; failures are checked
//! against the exact error message, since those texts are matched by callers.

use bibleutils::bibleutils::testing::assert_refs;
use bibleutils::{parse_refs, BookId, ParseError, Reference, ReferenceForm};
use rstest::rstest;

fn parse(refs: &str) -> Vec<Reference> {
    parse_refs(refs, ReferenceForm::Bibleutils).expect("reference string to parse")
}

fn failure(refs: &str) -> ParseError {
    parse_refs(refs, ReferenceForm::Bibleutils).expect_err("reference string to be rejected")
}

#[test]
fn test_verse_range_then_single_verse() {
    let refs = parse("Gen 1:1-2,6");

    assert_refs(&refs)
        .count(2)
        .item(0, |r| {
            r.book(BookId::Genesis)
                .no_end_book()
                .chapters(1, None)
                .verses(1, Some(2));
        })
        .item(1, |r| {
            r.book(BookId::Genesis).chapters(1, None).verses(6, None);
        });
}

#[test]
fn test_new_chapter_after_comma() {
    let refs = parse("Gen 1:1-2,6-23,2:23");

    assert_refs(&refs)
        .count(3)
        .item(0, |r| {
            r.book(BookId::Genesis).chapter(1).verses(1, Some(2));
        })
        .item(1, |r| {
            r.book(BookId::Genesis).chapter(1).verses(6, Some(23));
        })
        .item(2, |r| {
            r.book(BookId::Genesis).chapters(2, None).verses(23, None);
        });
}

#[test]
fn test_several_books_in_one_string() {
    let refs = parse("Gen 1:1-2,6, Ex 17:3, Deut 12,13");

    assert_refs(&refs)
        .count(5)
        .item(0, |r| {
            r.displays("GENESIS 1:1-2");
        })
        .item(1, |r| {
            r.displays("GENESIS 1:6");
        })
        .item(2, |r| {
            r.book(BookId::Exodus).chapter(17).verses(3, None);
        })
        .item(3, |r| {
            r.book(BookId::Deuteronomy).chapters(12, None).no_verse();
        })
        .item(4, |r| {
            r.book(BookId::Deuteronomy).chapters(13, None).no_verse();
        });
}

#[test]
fn test_book_range() {
    let refs = parse("1Kings-2Kings");

    assert_refs(&refs).count(1).item(0, |r| {
        r.book(BookId::FirstKings)
            .end_book(BookId::SecondKings)
            .no_chapter()
            .no_verse();
    });
}

#[test]
fn test_chapter_ranges_separated_by_comma() {
    let refs = parse("Exodus 12-15, 17-25");

    assert_refs(&refs)
        .count(2)
        .item(0, |r| {
            r.book(BookId::Exodus).chapters(12, Some(15)).no_verse();
        })
        .item(1, |r| {
            r.book(BookId::Exodus).chapters(17, Some(25)).no_verse();
        });
}

#[test]
fn test_book_list() {
    let refs = parse("Ruth, Esther,Jonah");

    assert_refs(&refs)
        .count(3)
        .item(0, |r| {
            r.book(BookId::Ruth).single().no_chapter();
        })
        .item(1, |r| {
            r.book(BookId::Esther).single();
        })
        .item(2, |r| {
            r.book(BookId::Jonah).single();
        });
}

#[rstest(
    input,
    case("Ex 12"),
    case("Ex. 12"),
    case("exodus 12"),
    case("EXODUS 12"),
    case("Exodus   12"),
    case("Exodus 12  ")
)]
fn test_book_name_spellings(input: &str) {
    let refs = parse(input);

    assert_refs(&refs).count(1).item(0, |r| {
        r.form(ReferenceForm::Bibleutils)
            .book(BookId::Exodus)
            .chapters(12, None)
            .no_verse()
            .no_sub_verses();
    });
}

#[rstest(
    input,
    expected,
    case("Gen 1 : 1 - 3", "GENESIS 1:1-3"),
    case("Gen 1:1 , 4", "GENESIS 1:4"),
    case("Gen - Ex", "GENESIS-EXODUS")
)]
fn test_spaces_around_delimiters(input: &str, expected: &str) {
    let refs = parse(input);
    assert_eq!(refs.last().map(ToString::to_string).as_deref(), Some(expected));
}

#[test]
fn test_unknown_book_leaves_bound_empty() {
    let refs = parse("Hezekiah 3:4");

    assert_refs(&refs).count(1).item(0, |r| {
        r.no_book().chapter(3).verses(4, None);
    });
}

#[rstest(
    input,
    expected,
    case("Exodus--Numbers", "Parsing failed at pos 7 in Exodus--Numbers"),
    case("Exodus 12::13", "Parsing failed at pos 10 in Exodus 12::13"),
    case("Exodus 12-13,,15", "Parsing failed at pos 13 in Exodus 12-13,,15"),
    case("Exodus 12-13,:-15", "Parsing failed at pos 13 in Exodus 12-13,:-15"),
    case(
        "Exodus-Numbers-Deuteronomy",
        "invalid \"-\" delimiter at 15 in Exodus-Numbers-Deuteronomy"
    ),
    case("Exodus 12-13-14", "invalid \"-\" delimiter at 13 in Exodus 12-13-14"),
    case("Exodus:12", "invalid chapter to verse transition at 7 in Exodus:12"),
    case("Gen 1:1:2", "invalid chapter to verse transition at 8 in Gen 1:1:2"),
    case("Gen 1:1,2a", "Parsing failed at pos 9 in Gen 1:1,2a"),
    case("Gen 1:1,,", "Parsing failed at pos 8 in Gen 1:1,,"),
    case("", "Parsing failed at pos 0 in "),
    case("12", "Parsing failed at pos 0 in 12")
)]
fn test_rejected_strings(input: &str, expected: &str) {
    assert_eq!(failure(input).to_string(), expected);
}

#[rstest(
    input,
    expected,
    case("Gen 1:", "GENESIS 1"),
    case("Gen 1-", "GENESIS 1"),
    case("Gen-", "GENESIS"),
    case("Gen 1:1,", "GENESIS 1:1"),
    case("Gen 1:1-", "GENESIS 1:1")
)]
fn test_trailing_delimiter_keeps_what_was_read(input: &str, expected: &str) {
    let refs = parse(input);

    assert_refs(&refs).count(1).item(0, |r| {
        r.book(BookId::Genesis).single().displays(expected);
    });
}

#[test]
fn test_numbered_book_after_verse_list() {
    let refs = parse("Ex 17:3,5, 2Kings 4:1");

    assert_refs(&refs)
        .count(3)
        .item(1, |r| {
            r.book(BookId::Exodus).chapter(17).verses(5, None);
        })
        .item(2, |r| {
            r.book(BookId::SecondKings).chapter(4).verses(1, None);
        });
}

#[test]
fn test_error_positions_are_reported() {
    assert_eq!(failure("Exodus--Numbers").position(), Some(7));
    assert_eq!(
        failure("Exodus-Numbers-Deuteronomy").position(),
        Some(15)
    );
}

#[rstest(
    input,
    expected,
    case("Gen 1:5-2", "ending vs 2 is before the starting vs 5"),
    case("Gen 7-3", "ending ch 3 is before the starting ch 7")
)]
fn test_descending_ranges(input: &str, expected: &str) {
    let err = failure(input);
    assert!(matches!(err, ParseError::RangeOrder(_)));
    assert_eq!(err.to_string(), expected);
    assert_eq!(err.position(), None);
}

#[test]
fn test_requested_form_does_not_change_output() {
    let refs = parse_refs("Numbers 3", ReferenceForm::Etcbch).expect("reference string to parse");

    assert_refs(&refs).count(1).item(0, |r| {
        r.form(ReferenceForm::Bibleutils).book(BookId::Numbers);
    });
}

#[test]
fn test_display_of_parsed_references() {
    let rendered: Vec<String> = parse("Gen 1:1-2,6, Ex 17:3, 1Kings-2Kings")
        .iter()
        .map(ToString::to_string)
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r###"
    GENESIS 1:1-2
    GENESIS 1:6
    EXODUS 17:3
    1KINGS-2KINGS
    "###);
}
