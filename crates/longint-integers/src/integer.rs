//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` exposing exactly the
//! primitive operations the divide-and-conquer kernel is built from: ring
//! arithmetic, shifts, low-bit masks, bit length, a schoolbook floor division
//! and a parser for short runs of decimal digits.

use dashu::base::{BitTest, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};

/// An arbitrary precision integer.
///
/// Multiplication is delegated to `dashu`, which switches to Karatsuba and
/// Toom-Cook for large operands. Division and radix conversion on top of it
/// live in `longint-kernel`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Parses a non-empty run of ASCII decimal digits.
    ///
    /// This is the quadratic base case of string-to-integer conversion and is
    /// only meant for short runs.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty or contains anything other than `0-9`.
    #[must_use]
    pub fn parse_digit_run(digits: &str) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        match IBig::from_str_radix(digits, 10) {
            Ok(value) => Self(value),
            Err(err) => panic!("digit run {digits:?} rejected: {err}"),
        }
    }

    /// Returns `2^exp`.
    #[must_use]
    pub fn power_of_two(exp: usize) -> Self {
        Self(IBig::ONE << exp)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the number of bits needed to represent the magnitude.
    ///
    /// Zero has bit length 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Returns the lowest `bits` bits of a non-negative integer.
    ///
    /// Equivalent to `self & ((1 << bits) - 1)`.
    #[must_use]
    pub fn low_bits(&self, bits: usize) -> Self {
        debug_assert!(!self.is_negative(), "low_bits on a negative integer");
        if self.bit_len() <= bits {
            return self.clone();
        }
        self - &((self >> bits) << bits)
    }

    /// Quadratic floor division.
    ///
    /// The quotient rounds toward negative infinity and the remainder takes
    /// the sign of the divisor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn schoolbook_divmod(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero");
        let mut q = &self.0 / &divisor.0;
        let mut r = &self.0 % &divisor.0;
        if !r.is_zero() && DashuSigned::is_negative(&r) != DashuSigned::is_negative(&divisor.0) {
            q -= IBig::ONE;
            r += &divisor.0;
        }
        (Self(q), Self(r))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u128.
    ///
    /// Returns `None` if the value is negative or wider than 128 bits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Computes `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        Self(&self.0 * &self.0)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations for every owned/borrowed operand combination.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0.$method(&rhs.0))
            }
        }

        impl $trait<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer((&self.0).$method(rhs.0))
            }
        }

        impl $trait<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Shl<usize> for Integer {
    type Output = Integer;

    fn shl(self, rhs: usize) -> Integer {
        Integer(self.0 << rhs)
    }
}

impl Shl<usize> for &Integer {
    type Output = Integer;

    fn shl(self, rhs: usize) -> Integer {
        Integer(&self.0 << rhs)
    }
}

/// Arithmetic right shift (rounds toward negative infinity).
impl Shr<usize> for Integer {
    type Output = Integer;

    fn shr(self, rhs: usize) -> Integer {
        Integer(self.0 >> rhs)
    }
}

impl Shr<usize> for &Integer {
    type Output = Integer;

    fn shr(self, rhs: usize) -> Integer {
        Integer(&self.0 >> rhs)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u128> for Integer {
    fn from(value: u128) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
