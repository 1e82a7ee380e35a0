//! Integer to decimal string conversion.
//!
//! The integer is split in half by bit width, each half is converted
//! recursively into a [`Decimal`], and the halves are recombined as
//! `hi * 2^w + lo` in decimal arithmetic. Every power of two the recursion
//! needs is computed once per conversion, before recursing.

use std::sync::Arc;

use longint_integers::Integer;

use crate::cache::{split_widths, PowerCache};
use crate::decimal::{Context, Decimal, DecimalError};
use crate::parallel;
use crate::thresholds::BITLIM;

/// Converts an integer to its decimal representation.
///
/// # Example
///
/// ```
/// use longint_integers::Integer;
/// use longint_kernel::to_decimal_string;
///
/// let n = Integer::new(-1) << 200;
/// assert_eq!(to_decimal_string(&n), n.to_string());
/// ```
#[must_use]
pub fn to_decimal_string(n: &Integer) -> String {
    to_decimal(n).to_string()
}

/// Converts an integer to an exact [`Decimal`] with exponent zero.
///
/// # Panics
///
/// Panics if the decimal accumulator reports a lost digit, which would mean
/// the working precision was sized wrongly.
#[must_use]
pub fn to_decimal(n: &Integer) -> Decimal {
    let magnitude = n.abs();
    let width = magnitude.bit_len();
    let encoder = Encoder::new(width);
    tracing::trace!(bits = width, powers = encoder.pow2.len(), "to_decimal");

    let value = encoder.inner(&magnitude, width);
    if n.is_negative() {
        -value
    } else {
        value
    }
}

/// State of one conversion: the exact decimal context and the powers of two
/// it needs. Both are dropped when the conversion finishes.
struct Encoder {
    ctx: Context,
    pow2: Pow2Table,
}

impl Encoder {
    fn new(width: usize) -> Self {
        let ctx = Context::exact();
        let pow2 = Pow2Table::new(ctx);
        for w in split_widths(width, BITLIM) {
            pow2.get(w);
        }
        Self { ctx, pow2 }
    }

    /// Converts `value`, which is known to fit in `width` bits.
    fn inner(&self, value: &Integer, width: usize) -> Decimal {
        if width <= BITLIM {
            return Decimal::from_integer(value);
        }

        let w2 = width >> 1;
        let hi = value >> w2;
        let lo = value - &(&hi << w2);

        let (hi, lo) = parallel::join(
            width,
            || self.inner(&hi, width - w2),
            || self.inner(&lo, w2),
        );
        let scaled = exact(self.ctx.mul(&hi, &self.pow2.get(w2)));
        exact(self.ctx.add(&scaled, &lo))
    }
}

/// Powers of two as decimals, keyed by exponent.
struct Pow2Table {
    ctx: Context,
    powers: PowerCache<usize, Decimal>,
}

impl Pow2Table {
    fn new(ctx: Context) -> Self {
        Self {
            ctx,
            powers: PowerCache::new(),
        }
    }

    /// Returns `2^w`, building it from smaller cached powers.
    fn get(&self, w: usize) -> Arc<Decimal> {
        self.powers.get_or_insert_with(w, || {
            if w < u128::BITS as usize {
                Decimal::from_u128(1 << w)
            } else if let Some(prev) = self.powers.get(w - 1) {
                exact(self.ctx.add(&prev, &prev))
            } else {
                let lo = w >> 1;
                exact(self.ctx.mul(&self.get(lo), &self.get(w - lo)))
            }
        })
    }

    fn len(&self) -> usize {
        self.powers.len()
    }
}

/// Every intermediate of the conversion is an integer, so the exact context
/// never has to drop a digit.
fn exact(result: Result<Decimal, DecimalError>) -> Decimal {
    match result {
        Ok(value) => value,
        Err(err) => panic!("decimal conversion lost precision: {err}"),
    }
}
