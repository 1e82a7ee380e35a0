//! Arbitrary precision decimal accumulator.
//!
//! `Decimal` holds a sign, a base-10⁹ coefficient and a power-of-ten exponent.
//! Arithmetic goes through a [`Context`], which bounds the working precision
//! and exponent range and decides which signals are fatal. The coefficient
//! buffer grows freely, so under [`Context::exact`] no operation can lose a
//! digit; the inexact trap then only asserts that this holds.

pub mod limbs;

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use longint_integers::Integer;

/// Largest working precision a [`Context`] accepts, in digits.
#[cfg(target_pointer_width = "64")]
pub const MAX_PRECISION: usize = 999_999_999_999_999_999;

/// Largest working precision a [`Context`] accepts, in digits.
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_PRECISION: usize = 425_000_000;

/// Largest adjusted exponent a [`Context`] accepts.
#[cfg(target_pointer_width = "64")]
pub const MAX_EMAX: i64 = 999_999_999_999_999_999;

/// Largest adjusted exponent a [`Context`] accepts.
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_EMAX: i64 = 425_000_000;

/// Signals raised by a [`Context`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    /// Non-zero digits were discarded to fit the working precision.
    #[error("inexact result: {digits} digits do not fit precision {precision}")]
    Inexact {
        /// Digits in the exact result.
        digits: usize,
        /// Working precision of the context.
        precision: usize,
    },

    /// Digits were discarded to fit the working precision.
    #[error("rounded result: {digits} digits do not fit precision {precision}")]
    Rounded {
        /// Digits in the exact result.
        digits: usize,
        /// Working precision of the context.
        precision: usize,
    },

    /// The adjusted exponent exceeds the context's range.
    #[error("decimal overflow: adjusted exponent {adjusted} exceeds {emax}")]
    Overflow {
        /// Adjusted exponent of the result.
        adjusted: i64,
        /// Exponent limit of the context.
        emax: i64,
    },
}

/// Which signals abort an operation instead of being absorbed.
///
/// Overflow is always reported since there is no infinity to saturate to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Traps {
    /// Abort when non-zero digits would be discarded.
    pub inexact: bool,
    /// Abort when any digit would be discarded.
    pub rounded: bool,
}

/// Working precision, exponent range and traps for decimal arithmetic.
///
/// A context is a plain value: it is configured for one computation and
/// passed to every operation of that computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    precision: usize,
    emax: i64,
    traps: Traps,
}

impl Context {
    /// Creates a context with the given precision, the widest exponent range
    /// and no traps.
    ///
    /// # Panics
    ///
    /// Panics if `precision` is zero or above [`MAX_PRECISION`].
    #[must_use]
    pub fn new(precision: usize) -> Self {
        assert!(
            (1..=MAX_PRECISION).contains(&precision),
            "decimal precision {precision} out of range"
        );
        Self {
            precision,
            emax: MAX_EMAX,
            traps: Traps::default(),
        }
    }

    /// Creates the context used for exact integer conversion: precision and
    /// exponent range at their maxima, with the inexact trap enabled.
    #[must_use]
    pub fn exact() -> Self {
        Self::new(MAX_PRECISION).with_traps(Traps {
            inexact: true,
            rounded: false,
        })
    }

    /// Returns this context with a different exponent limit.
    #[must_use]
    pub fn with_emax(mut self, emax: i64) -> Self {
        self.emax = emax.clamp(0, MAX_EMAX);
        self
    }

    /// Returns this context with different traps.
    #[must_use]
    pub fn with_traps(mut self, traps: Traps) -> Self {
        self.traps = traps;
        self
    }

    /// Working precision in digits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Largest permitted adjusted exponent.
    #[must_use]
    pub fn emax(&self) -> i64 {
        self.emax
    }

    /// Enabled traps.
    #[must_use]
    pub fn traps(&self) -> Traps {
        self.traps
    }

    /// Returns `lhs + rhs`, rounded to this context.
    ///
    /// # Errors
    ///
    /// Returns the first trapped signal, or [`DecimalError::Overflow`].
    pub fn add(&self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        if rhs.is_zero() {
            return self.round(lhs.clone());
        }
        if lhs.is_zero() {
            return self.round(rhs.clone());
        }

        // Align both coefficients on the smaller exponent.
        let exponent = lhs.exponent.min(rhs.exponent);
        let a = lhs.aligned_to(exponent);
        let b = rhs.aligned_to(exponent);

        let (negative, coefficient) = if lhs.negative == rhs.negative {
            (lhs.negative, limbs::add(&a, &b))
        } else {
            match limbs::cmp(&a, &b) {
                Ordering::Equal => return Ok(Decimal::zero()),
                Ordering::Greater => (lhs.negative, difference(a, &b)),
                Ordering::Less => (rhs.negative, difference(b, &a)),
            }
        };

        self.round(Decimal {
            negative,
            coefficient,
            exponent,
        })
    }

    /// Returns `lhs * rhs`, rounded to this context.
    ///
    /// # Errors
    ///
    /// Returns the first trapped signal, or [`DecimalError::Overflow`].
    pub fn mul(&self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        if lhs.is_zero() || rhs.is_zero() {
            return Ok(Decimal::zero());
        }
        let exponent = lhs.exponent.checked_add(rhs.exponent).ok_or(DecimalError::Overflow {
            adjusted: i64::MAX,
            emax: self.emax,
        })?;
        self.round(Decimal {
            negative: lhs.negative != rhs.negative,
            coefficient: limbs::mul(&lhs.coefficient, &rhs.coefficient),
            exponent,
        })
    }

    /// Fits a value to this context's precision and exponent range.
    ///
    /// Excess digits are discarded (round-down), raising `Rounded` and, if any
    /// of them was non-zero, `Inexact`.
    ///
    /// # Errors
    ///
    /// Returns the first trapped signal, or [`DecimalError::Overflow`].
    pub fn round(&self, mut value: Decimal) -> Result<Decimal, DecimalError> {
        let digits = value.digits();
        if digits > self.precision {
            let lost = limbs::shift_down(&mut value.coefficient, digits - self.precision);
            if lost && self.traps.inexact {
                return Err(DecimalError::Inexact {
                    digits,
                    precision: self.precision,
                });
            }
            if self.traps.rounded {
                return Err(DecimalError::Rounded {
                    digits,
                    precision: self.precision,
                });
            }
            value.exponent += (digits - self.precision) as i64;
        }

        if !value.is_zero() {
            let adjusted = value.exponent + value.digits() as i64 - 1;
            if adjusted > self.emax {
                return Err(DecimalError::Overflow {
                    adjusted,
                    emax: self.emax,
                });
            }
        }
        Ok(value)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(28)
    }
}

fn difference(mut larger: Vec<u32>, smaller: &[u32]) -> Vec<u32> {
    limbs::sub_in_place(&mut larger, smaller);
    larger
}

/// An arbitrary precision decimal number `(-1)^sign * coefficient * 10^exponent`.
///
/// Equality compares representations, so `100` and `10E+1` are distinct.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Decimal {
    negative: bool,
    coefficient: Vec<u32>,
    exponent: i64,
}

impl Decimal {
    /// Returns zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Exact conversion from a native integer.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self {
            negative: false,
            coefficient: limbs::from_u128(value),
            exponent: 0,
        }
    }

    /// Exact conversion from an integer of at most 128 bits magnitude.
    ///
    /// Wider integers go through `to_decimal`, which splits them first.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude needs more than 128 bits.
    #[must_use]
    pub fn from_integer(value: &Integer) -> Self {
        let Some(magnitude) = value.abs().to_u128() else {
            panic!("{}-bit integer exceeds native decimal conversion", value.bit_len());
        };
        let decimal = Self::from_u128(magnitude);
        if value.is_negative() {
            -decimal
        } else {
            decimal
        }
    }

    /// Returns true if this decimal is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_empty()
    }

    /// Returns true if this decimal is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of digits in the coefficient (0 for zero).
    #[must_use]
    pub fn digits(&self) -> usize {
        limbs::digit_count(&self.coefficient)
    }

    /// Power-of-ten exponent.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    fn aligned_to(&self, exponent: i64) -> Vec<u32> {
        let mut coefficient = self.coefficient.clone();
        limbs::shift_up(&mut coefficient, (self.exponent - exponent) as usize);
        coefficient
    }
}

impl std::ops::Neg for Decimal {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

/// Writes the coefficient with an optional `-`, followed by `E+k` when the
/// exponent is non-zero.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let mut digits = String::new();
        limbs::write_digits(&self.coefficient, &mut digits);
        f.write_str(&digits)?;
        if self.exponent != 0 {
            write!(f, "E{:+}", self.exponent)?;
        }
        Ok(())
    }
}
