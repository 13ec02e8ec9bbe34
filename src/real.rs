//! Conversions for the binary float widths and the 96-bit decimal type.
//!
//! Floats follow IEEE-754 rounding all the way out: a magnitude past the
//! finite range parses to the matching infinity instead of failing, so the
//! float converters have no overflow category at all. The decimal type has a
//! hard range (roughly ±7.9e28) and does fail past it.

use crate::prelude::*;

// `Decimal` has no const constructors, so the strict sentinels live behind
// `Lazy`.
static DECIMAL_FORMAT_SENTINEL: Lazy<Decimal> = Lazy::new(|| Decimal::new(-11, 1));
static DECIMAL_OVERFLOW_SENTINEL: Lazy<Decimal> = Lazy::new(|| Decimal::new(-22, 1));

pub fn try_parse_f32(input: Option<&str>) -> Option<f32> {
    scan_f32(input?).ok()
}

/// Masks a format error to NaN.
pub fn parse_f32(input: Option<&str>) -> Result<f32, ParseFailure> {
    match scan_f32(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure) => Ok(mask(failure, f32::NAN)),
    }
}

pub fn try_parse_f64(input: Option<&str>) -> Option<f64> {
    scan_f64(input?).ok()
}

/// Masks a format error to the smallest positive `f64` — the subnormal
/// `5e-324` (`f64::from_bits(1)`), not `f64::MIN_POSITIVE`.
pub fn parse_f64(input: Option<&str>) -> Result<f64, ParseFailure> {
    match scan_f64(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure) => Ok(mask(failure, f64::from_bits(1))),
    }
}

pub fn try_parse_decimal(input: Option<&str>) -> Option<Decimal> {
    scan_decimal(input?).ok()
}

/// Masks a format error to `-1.1` and overflow to `-2.2`.
pub fn parse_decimal(input: Option<&str>) -> Result<Decimal, ParseFailure> {
    match scan_decimal(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, *DECIMAL_FORMAT_SENTINEL)),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, *DECIMAL_OVERFLOW_SENTINEL)),
        Err(failure) => Err(failure),
    }
}
