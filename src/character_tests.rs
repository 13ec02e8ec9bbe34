use crate::prelude::*;

use super::character::*;

#[test]
fn try_parse_char_rejects_invalid_input() {
    assert_eq!(try_parse_char(None), None);
    assert_eq!(try_parse_char(Some("")), None);
    assert_eq!(try_parse_char(Some("ab")), None);
    // No trimming here, so padding makes the input three characters long.
    assert_eq!(try_parse_char(Some(" a ")), None);
}

#[test]
fn try_parse_char_accepts_single_characters() {
    assert_eq!(try_parse_char(Some(" ")), Some(' '));
    assert_eq!(try_parse_char(Some("a")), Some('a'));
    assert_eq!(try_parse_char(Some("A")), Some('A'));
    assert_eq!(try_parse_char(Some("+")), Some('+'));
}

#[test]
fn try_parse_char_counts_characters_not_bytes() {
    assert_eq!(try_parse_char(Some("é")), Some('é'));
    assert_eq!(try_parse_char(Some("字")), Some('字'));
    assert_eq!(try_parse_char(Some("字字")), None);
}

#[test]
fn parse_char_requires_input() {
    assert_eq!(parse_char(None), Err(ParseFailure::InvalidArgument));
}

#[test]
fn parse_char_masks_format_errors_to_space() {
    assert_eq!(parse_char(Some("")), Ok(' '));
    assert_eq!(parse_char(Some("ab")), Ok(' '));
}

#[test]
fn parse_char_accepts_single_characters() {
    assert_eq!(parse_char(Some(" ")), Ok(' '));
    assert_eq!(parse_char(Some("a")), Ok('a'));
    assert_eq!(parse_char(Some("A")), Ok('A'));
}
