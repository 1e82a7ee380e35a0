//! # longint
//!
//! Fast division and decimal conversion for arbitrary precision integers.
//!
//! Schoolbook division and radix conversion cost time quadratic in the number
//! of digits. `longint` layers divide-and-conquer versions of all three on
//! top of an integer type whose multiplication is already sub-quadratic.
//!
//! ## Quick Start
//!
//! ```rust
//! use longint::prelude::*;
//!
//! let n = Integer::from_decimal_str("-12_345_678_901_234_567_890").unwrap();
//! let (q, r) = n.fast_divmod(&Integer::new(97)).unwrap();
//! assert_eq!(&(&q * &Integer::new(97)) + &r, n);
//! assert_eq!(n.to_decimal_string(), "-12345678901234567890");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use longint_integers as integers;
pub use longint_kernel as kernel;

use longint_integers::Integer;
use longint_kernel::{DivisionError, ParseDigitsError};

/// Kernel operations as methods on [`Integer`].
pub trait FastConversions: Sized {
    /// Floor division and remainder, see [`kernel::fast_divmod`].
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::ZeroDivisor`] if `divisor` is zero.
    fn fast_divmod(&self, divisor: &Self) -> Result<(Self, Self), DivisionError>;

    /// Decimal representation, see [`kernel::to_decimal_string`].
    fn to_decimal_string(&self) -> String;

    /// Parses an optionally signed decimal string, see
    /// [`kernel::parse_integer`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseDigitsError`] for malformed input.
    fn from_decimal_str(s: &str) -> Result<Self, ParseDigitsError>;
}

impl FastConversions for Integer {
    fn fast_divmod(&self, divisor: &Self) -> Result<(Self, Self), DivisionError> {
        longint_kernel::fast_divmod(self, divisor)
    }

    fn to_decimal_string(&self) -> String {
        longint_kernel::to_decimal_string(self)
    }

    fn from_decimal_str(s: &str) -> Result<Self, ParseDigitsError> {
        longint_kernel::parse_integer(s)
    }
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::FastConversions;
    pub use longint_integers::Integer;
    pub use longint_kernel::{
        fast_divmod, parse_digits, parse_integer, to_decimal_string, DivisionError, KernelError,
        ParseDigitsError,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use proptest::prelude::*;

    #[test]
    fn test_trait_methods() {
        let n = Integer::from_decimal_str("12345678901234567890123456789").unwrap();
        assert_eq!(n.to_decimal_string(), "12345678901234567890123456789");
        let (q, r) = n.fast_divmod(&Integer::new(97)).unwrap();
        assert_eq!(q.to_decimal_string(), "127275040218913071032200585");
        assert_eq!(r, Integer::new(44));
    }

    #[test]
    fn test_errors_convert_to_kernel_error() {
        let zero = Integer::new(0);
        let err: KernelError = Integer::new(1).fast_divmod(&zero).unwrap_err().into();
        assert_eq!(err, KernelError::Division(DivisionError::ZeroDivisor));

        let err: KernelError = Integer::from_decimal_str("12a4").unwrap_err().into();
        assert_eq!(err, KernelError::Parse(ParseDigitsError { position: 3 }));
        assert_eq!(err.to_string(), "invalid decimal string (position 3)");
    }

    proptest! {
        #[test]
        fn decimal_roundtrip(v in any::<i128>()) {
            let n = Integer::from_decimal_str(&v.to_string()).unwrap();
            prop_assert_eq!(n.to_decimal_string(), v.to_string());
        }
    }
}
