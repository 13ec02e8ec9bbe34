//! Integer conversions for all eight fixed widths.
//!
//! The probes behave uniformly: trimmed input, optional leading sign, whole
//! string consumed, no saturation. The strict forms share only the
//! absent-input rule; which failures they mask, and behind which sentinel,
//! is a deliberate per-type contract:
//!
//! | type | format error       | overflow            |
//! |------|--------------------|---------------------|
//! | i32  | `0`                | `-1`                |
//! | u32  | `0`                | `u32::MAX`          |
//! | u8   | `u8::MAX`          | `0`                 |
//! | i8   | `i8::MAX`          | propagated          |
//! | i16  | propagated         | `i16::MIN`          |
//! | u16  | `0`                | `u16::MAX`          |
//! | i64  | `i64::MIN`         | `-1`                |
//! | u64  | propagated         | propagated          |

use crate::prelude::*;

pub fn try_parse_i32(input: Option<&str>) -> Option<i32> {
    scan_i32(input?).ok()
}

/// Masks a format error to `0` and overflow to `-1`.
pub fn parse_i32(input: Option<&str>) -> Result<i32, ParseFailure> {
    match scan_i32(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, 0)),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, -1)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_u32(input: Option<&str>) -> Option<u32> {
    scan_u32(input?).ok()
}

/// Masks a format error to the type minimum and overflow to the type maximum.
pub fn parse_u32(input: Option<&str>) -> Result<u32, ParseFailure> {
    match scan_u32(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, u32::MIN)),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, u32::MAX)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_u8(input: Option<&str>) -> Option<u8> {
    scan_u8(input?).ok()
}

/// Masks a format error to the type maximum and overflow to the type minimum.
/// Note this is the mirror image of the `u16`/`u32` policies.
pub fn parse_u8(input: Option<&str>) -> Result<u8, ParseFailure> {
    match scan_u8(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, u8::MAX)),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, u8::MIN)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_i8(input: Option<&str>) -> Option<i8> {
    scan_i8(input?).ok()
}

/// Masks a format error to the type maximum; overflow propagates.
pub fn parse_i8(input: Option<&str>) -> Result<i8, ParseFailure> {
    match scan_i8(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, i8::MAX)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_i16(input: Option<&str>) -> Option<i16> {
    scan_i16(input?).ok()
}

/// Masks overflow to the type minimum; format errors propagate.
pub fn parse_i16(input: Option<&str>) -> Result<i16, ParseFailure> {
    match scan_i16(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, i16::MIN)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_u16(input: Option<&str>) -> Option<u16> {
    scan_u16(input?).ok()
}

/// Masks a format error to the type minimum and overflow to the type maximum.
pub fn parse_u16(input: Option<&str>) -> Result<u16, ParseFailure> {
    match scan_u16(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, u16::MIN)),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, u16::MAX)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_i64(input: Option<&str>) -> Option<i64> {
    scan_i64(input?).ok()
}

/// Masks a format error to the type minimum and overflow to `-1`.
pub fn parse_i64(input: Option<&str>) -> Result<i64, ParseFailure> {
    match scan_i64(required(input)?) {
        Ok(value) => Ok(value),
        Err(failure @ ParseFailure::FormatError) => Ok(mask(failure, i64::MIN)),
        Err(failure @ ParseFailure::OverflowError) => Ok(mask(failure, -1)),
        Err(failure) => Err(failure),
    }
}

pub fn try_parse_u64(input: Option<&str>) -> Option<u64> {
    scan_u64(input?).ok()
}

/// Masks nothing: format errors and overflow both propagate.
pub fn parse_u64(input: Option<&str>) -> Result<u64, ParseFailure> {
    scan_u64(required(input)?)
}
