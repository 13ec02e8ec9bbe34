//! The shared lexical layer. Everything in here classifies failures; nothing
//! in here masks them. Strict per-type sentinel policies live with the
//! converters so each policy reads as one `match`.

// Digit bytes are pre-validated to `b'0'..=b'9'`, so the widening casts in the
// scanners are exact.
#![allow(clippy::as_conversions)]

use crate::prelude::*;

/// Strict operations require input to be present before any scanning starts.
pub(crate) fn required(input: Option<&str>) -> Result<&str, ParseFailure> {
    input.ok_or(ParseFailure::InvalidArgument)
}

// Splits a trimmed integer literal into its sign and its digits. Partial
// matches are rejected here, so the scanners only ever see pure digit runs.
fn sign_and_digits(text: &str) -> Result<(bool, &[u8]), ParseFailure> {
    let (negative, digits) = match text.trim().as_bytes() {
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        rest => (false, rest),
    };

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseFailure::FormatError);
    }

    Ok((negative, digits))
}

macro_rules! unsigned_scanner {
    ($name:ident, $int:ty) => {
        pub(crate) fn $name(text: &str) -> Result<$int, ParseFailure> {
            let (negative, digits) = sign_and_digits(text)?;

            // A minus sign puts every unsigned input below range, "-0" included.
            if negative {
                return Err(ParseFailure::OverflowError);
            }

            let mut acc: $int = 0;

            for &byte in digits {
                let digit = byte.wrapping_sub(b'0') as $int;
                acc = acc
                    .checked_mul(10)
                    .and_then(|next| next.checked_add(digit))
                    .ok_or(ParseFailure::OverflowError)?;
            }

            Ok(acc)
        }
    };
}

macro_rules! signed_scanner {
    ($name:ident, $int:ty) => {
        pub(crate) fn $name(text: &str) -> Result<$int, ParseFailure> {
            let (negative, digits) = sign_and_digits(text)?;

            // Negative inputs accumulate downward so `MIN` stays reachable.
            let mut acc: $int = 0;

            for &byte in digits {
                let digit = byte.wrapping_sub(b'0') as $int;
                let shifted = acc.checked_mul(10).ok_or(ParseFailure::OverflowError)?;
                acc = if negative {
                    shifted.checked_sub(digit)
                } else {
                    shifted.checked_add(digit)
                }
                .ok_or(ParseFailure::OverflowError)?;
            }

            Ok(acc)
        }
    };
}

signed_scanner!(scan_i8, i8);
signed_scanner!(scan_i16, i16);
signed_scanner!(scan_i32, i32);
signed_scanner!(scan_i64, i64);
unsigned_scanner!(scan_u8, u8);
unsigned_scanner!(scan_u16, u16);
unsigned_scanner!(scan_u32, u32);
unsigned_scanner!(scan_u64, u64);

macro_rules! float_scanner {
    ($name:ident, $float:ty) => {
        // Binary floats have no overflow category: a magnitude past the finite
        // range rounds to the matching infinity and counts as success.
        pub(crate) fn $name(text: &str) -> Result<$float, ParseFailure> {
            text.trim().parse().map_err(|_| ParseFailure::FormatError)
        }
    };
}

float_scanner!(scan_f32, f32);
float_scanner!(scan_f64, f64);

// Decimal literals are sign + digits with at most one point, no exponent and
// no grouping. The literal is rebuilt with both sides of the point populated
// before conversion, so an in-grammar refusal can only mean the value does
// not fit the 96-bit range.
pub(crate) fn scan_decimal(text: &str) -> Result<Decimal, ParseFailure> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (integral, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if integral.is_empty() && fraction.is_empty() {
        return Err(ParseFailure::FormatError);
    }

    if !integral.bytes().all(|byte| byte.is_ascii_digit())
        || !fraction.bytes().all(|byte| byte.is_ascii_digit())
    {
        return Err(ParseFailure::FormatError);
    }

    let mut canonical = String::with_capacity(trimmed.len().saturating_add(2));

    if trimmed.starts_with('-') {
        canonical.push('-');
    }

    canonical.push_str(if integral.is_empty() { "0" } else { integral });

    if !fraction.is_empty() {
        canonical.push('.');
        canonical.push_str(fraction);
    }

    canonical.parse().map_err(|_| ParseFailure::OverflowError)
}
