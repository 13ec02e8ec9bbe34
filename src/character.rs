use crate::prelude::*;

/// Converts a string holding exactly one character. This is the one converter
/// that does not trim: `" "` is a valid single character, and `" a "` is
/// three of them.
pub fn try_parse_char(input: Option<&str>) -> Option<char> {
    scan_char(input?).ok()
}

/// Strict form: absent input is an invalid argument; any length other than
/// one (empty included) masks to the space character.
pub fn parse_char(input: Option<&str>) -> Result<char, ParseFailure> {
    match scan_char(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure) => Ok(mask(failure, ' ')),
    }
}

fn scan_char(text: &str) -> Result<char, ParseFailure> {
    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
        (Some(only), None) => Ok(only),
        _ => Err(ParseFailure::FormatError),
    }
}
