//! Integer to decimal string conversion by repeated division.
//!
//! An alternative to the decimal-accumulator encoder that needs nothing but
//! integer arithmetic: the value is split by a power of ten with
//! [`fast_divmod`](crate::fast_divmod)'s divide-and-conquer division, each
//! half is converted recursively, and the low half is zero-padded to its
//! width. Below `POW10_DIGIT_LIMIT` digits the primitive formats directly.

use std::sync::Arc;

use num_traits::Zero;

use longint_integers::Integer;

use crate::cache::{split_widths, PowerCache};
use crate::division::floor_divmod;
use crate::thresholds::POW10_DIGIT_LIMIT;

/// Converts an integer to its decimal representation using only integer
/// division. Produces the same output as
/// [`to_decimal_string`](crate::to_decimal_string).
#[must_use]
pub fn to_decimal_string_by_division(n: &Integer) -> String {
    let magnitude = n.abs();
    let width = decimal_width_bound(magnitude.bit_len());
    let splitter = Splitter::new(width);
    tracing::trace!(digits = width, powers = splitter.pow10.len(), "to_decimal_string_by_division");

    let mut out = String::with_capacity(width + 1);
    if n.is_negative() {
        out.push('-');
    }
    splitter.write(&magnitude, width, false, &mut out);
    out
}

/// Upper bound on the decimal digits of a `bits`-bit integer.
///
/// `0.30103` slightly exceeds `log10(2)`, so the bound is never too small.
pub fn decimal_width_bound(bits: usize) -> usize {
    bits * 30_103 / 100_000 + 1
}

struct Splitter {
    pow10: PowerCache<usize, Integer>,
}

impl Splitter {
    fn new(width: usize) -> Self {
        let splitter = Self {
            pow10: PowerCache::new(),
        };
        for w in split_widths(width, POW10_DIGIT_LIMIT) {
            splitter.pow10(w);
        }
        splitter
    }

    /// Returns `10^w`, building it from smaller cached powers.
    fn pow10(&self, w: usize) -> Arc<Integer> {
        self.pow10.get_or_insert_with(w, || {
            if w <= POW10_DIGIT_LIMIT {
                Integer::new(10).pow(w as u32)
            } else if let Some(prev) = self.pow10.get(w - 1) {
                &*prev * &Integer::new(10)
            } else {
                let lo = w >> 1;
                &*self.pow10(lo) * &*self.pow10(w - lo)
            }
        })
    }

    /// Appends the digits of `value < 10^width`, zero-padded to `width`
    /// digits when `pad` is set.
    fn write(&self, value: &Integer, width: usize, pad: bool, out: &mut String) {
        if width <= POW10_DIGIT_LIMIT {
            let digits = value.to_string();
            if pad {
                out.extend(std::iter::repeat('0').take(width.saturating_sub(digits.len())));
            }
            out.push_str(&digits);
            return;
        }

        let w2 = width >> 1;
        let (hi, lo) = floor_divmod(value, &self.pow10(w2));
        if !pad && hi.is_zero() {
            // The width bound overshot; skip the empty high half.
            self.write(&lo, w2, false, out);
        } else {
            self.write(&hi, width - w2, pad, out);
            self.write(&lo, w2, true, out);
        }
    }
}
