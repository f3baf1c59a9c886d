//! Integration tests for verse range expansion

use bibleutils::bibleutils::testing::assert_refs;
use bibleutils::{
    convert_refs, expand_refs, parse_refs, BookId, NotImplementedError, Reference, ReferenceForm,
};
use rstest::rstest;

fn parse(refs: &str) -> Vec<Reference> {
    parse_refs(refs, ReferenceForm::Bibleutils).expect("reference string to parse")
}

#[test]
fn test_verse_range_becomes_single_verses() {
    let expanded = expand_refs(&parse("Gen 1:4-6")).expect("expansion to succeed");

    assert_refs(&expanded)
        .count(3)
        .all(|r| {
            r.book(BookId::Genesis)
                .chapters(1, None)
                .single()
                .no_sub_verses();
        })
        .item(0, |r| {
            r.verse(4);
        })
        .item(1, |r| {
            r.verse(5);
        })
        .item(2, |r| {
            r.verse(6);
        });
}

#[test]
fn test_order_follows_input() {
    let expanded =
        expand_refs(&parse("Gen 1:1-2,6, Ex 17:3-4")).expect("expansion to succeed");
    let rendered: Vec<String> = expanded.iter().map(ToString::to_string).collect();

    insta::assert_snapshot!(rendered.join("\n"), @r###"
    GENESIS 1:1
    GENESIS 1:2
    GENESIS 1:6
    EXODUS 17:3
    EXODUS 17:4
    "###);
}

#[test]
fn test_external_form_is_kept() {
    let external =
        convert_refs(&parse("John 3:16-17"), ReferenceForm::Etcbcg).expect("conversion");
    let expanded = expand_refs(&external).expect("expansion to succeed");

    assert_refs(&expanded)
        .count(2)
        .all(|r| {
            r.form(ReferenceForm::Etcbcg).book_name("John").chapter(3);
        })
        .item(1, |r| {
            r.verse(17);
        });
}

#[rstest(
    input,
    expected,
    case("Gen-Ex", NotImplementedError::BookRange),
    case("Gen 1-2:3", NotImplementedError::ChapterRange),
    case("Gen 1-2", NotImplementedError::ChapterRange),
    case("Gen 1", NotImplementedError::WholeChapter),
    case("Gen 1:1, Ex 3", NotImplementedError::WholeChapter)
)]
fn test_unsupported_expansions(input: &str, expected: NotImplementedError) {
    assert_eq!(expand_refs(&parse(input)), Err(expected));
}

#[test]
fn test_error_messages() {
    let err = expand_refs(&parse("Gen-Ex")).unwrap_err();
    assert!(err.to_string().contains("book range expansion not yet implemented"));

    let err = expand_refs(&parse("Gen 1-2")).unwrap_err();
    assert!(err
        .to_string()
        .contains("chapter range expansion not yet implemented"));
}

#[test]
fn test_empty_input() {
    assert_eq!(expand_refs(&[]), Ok(Vec::new()));
}
