use crate::prelude::*;

/// Recognizes the literals `true` and `false`, ignoring case and surrounding
/// whitespace. Anything else (absent input included) is `None`.
pub fn try_parse_bool(input: Option<&str>) -> Option<bool> {
    scan_bool(input?).ok()
}

/// Strict form: absent input is an invalid argument; unrecognized input masks
/// to `false`.
pub fn parse_bool(input: Option<&str>) -> Result<bool, ParseFailure> {
    match scan_bool(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure) => Ok(mask(failure, false)),
    }
}

fn scan_bool(text: &str) -> Result<bool, ParseFailure> {
    let trimmed = text.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseFailure::FormatError)
    }
}
