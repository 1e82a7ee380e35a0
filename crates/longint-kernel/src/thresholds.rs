//! Base-case thresholds.
//!
//! Below each threshold the recursion stops and a direct quadratic method is
//! used, because splitting further costs more than it saves. These are fixed
//! at compile time and are not tunable per call.

/// Divisor bit width at or below which `_div2n1n` falls back to schoolbook
/// division.
pub const DIV_LIMIT: usize = 4000;

/// Bit width at or below which the decimal encoder converts a value to the
/// decimal accumulator directly. Such values always fit in a `u128`.
pub const BITLIM: usize = 128;

/// Digit count at or below which the decoder parses a digit run directly.
pub const DIGIT_LIMIT: usize = 3000;

/// Limb count below which decimal multiplication uses the schoolbook method.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Digit count at or below which the division-based encoder formats a value
/// directly.
pub const POW10_DIGIT_LIMIT: usize = 1000;

/// Bit width above which the `parallel` feature evaluates both halves of a
/// conversion concurrently.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1 << 18;

// The decimal encoder's base case converts through u128.
const _: () = assert!(BITLIM <= 128);
