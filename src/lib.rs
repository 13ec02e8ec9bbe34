//! Stateless helpers that turn optional text into primitive values, in two
//! flavors per target type: a probe (`try_parse_*`) that reports failure
//! in-band, and a strict form (`parse_*`) with a per-type policy for masking
//! or propagating format and overflow failures.

// Clippy rules
#![deny(clippy::as_conversions)]
#![deny(clippy::assertions_on_result_states)]
#![deny(clippy::dbg_macro)]
#![warn(clippy::deref_by_slicing)]
#![warn(let_underscore_drop)]
#![warn(clippy::let_underscore_must_use)]
#![deny(clippy::mem_forget)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
#![deny(clippy::self_named_module_files)]
#![deny(clippy::string_add)]
#![deny(clippy::string_add_assign)]
#![deny(clippy::string_slice)]
#![deny(clippy::todo)]
#![deny(clippy::try_err)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unseparated_literal_suffix)]
// Panicking in tests is okay.
#![cfg_attr(not(test), deny(clippy::arithmetic_side_effects))]

mod boolean;
mod character;
#[cfg(test)]
mod character_tests;
mod failure;
mod integer;
mod prelude;
mod real;
mod scan;

pub use self::boolean::*;
pub use self::character::*;
pub use self::failure::ParseFailure;
pub use self::integer::*;
pub use self::real::*;

// Callers need the decimal type to do anything with `parse_decimal`.
pub use rust_decimal::Decimal;
