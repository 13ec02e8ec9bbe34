// A small prelude so the converter modules don't each repeat the same `use` block.

pub use crate::failure::*;
pub use crate::scan::*;
pub use once_cell::sync::Lazy;
pub use rust_decimal::Decimal;
pub use std::fmt;

#[cfg(test)]
pub use test_prelude::*;
