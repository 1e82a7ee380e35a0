//! # longint-kernel
//!
//! Divide-and-conquer division and decimal conversion for big integers.
//!
//! Long division and radix conversion are quadratic in the number of digits,
//! which dominates once integers reach thousands of digits. This crate
//! replaces them with recursive algorithms whose cost tracks the
//! sub-quadratic multiplication of the underlying [`Integer`]:
//!
//! - [`fast_divmod`]: recursive 2n-by-n division with floor semantics
//! - [`to_decimal_string`]: binary splitting into an exact [`Decimal`]
//! - [`parse_digits`]: digit splitting with cached powers of five
//!
//! ## Algorithm Selection
//!
//! Each algorithm bottoms out in the primitive's direct method below a fixed
//! threshold (see [`thresholds`]):
//! - Division: divisors of at most `DIV_LIMIT` bits use schoolbook division
//! - Encoding: values of at most `BITLIM` bits convert natively
//! - Decoding: runs of at most `DIGIT_LIMIT` digits parse directly

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod decimal;
pub mod decoder;
pub mod division;
pub mod encoder;
pub mod error;
pub mod radix;
pub mod thresholds;

mod parallel;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod testing;

pub use cache::{PowerCache, Pow5Cache};
pub use decimal::{Context, Decimal, DecimalError, Traps};
pub use decoder::{parse_digits, parse_integer, DecimalDecoder};
pub use division::fast_divmod;
pub use encoder::{to_decimal, to_decimal_string};
pub use error::{DivisionError, KernelError, ParseDigitsError};
pub use longint_integers::Integer;
pub use radix::to_decimal_string_by_division;
