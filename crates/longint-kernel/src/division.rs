//! Divide-and-conquer integer division.
//!
//! This is the recursive Burnikel-Ziegler scheme: a `2n`-bit by `n`-bit
//! division is reduced to two `3h`-bit by `2h`-bit divisions (`h = n/2`),
//! each of which costs one `h`-bit recursive division plus one `h × h`
//! multiplication. With sub-quadratic multiplication underneath, the total
//! cost is a constant multiple of multiplication times a logarithmic factor
//! instead of the quadratic cost of long division.
//!
//! Quotients and remainders follow the floor convention: the quotient rounds
//! toward negative infinity and a non-zero remainder has the sign of the
//! divisor.

use num_traits::{One, Zero};

use longint_integers::Integer;

use crate::error::DivisionError;
use crate::thresholds::DIV_LIMIT;

/// Computes `(a div b, a mod b)` under floor division.
///
/// # Errors
///
/// Returns [`DivisionError::ZeroDivisor`] if `b` is zero.
///
/// # Example
///
/// ```
/// use longint_integers::Integer;
/// use longint_kernel::fast_divmod;
///
/// let (q, r) = fast_divmod(&Integer::new(-7), &Integer::new(2)).unwrap();
/// assert_eq!((q.to_i64(), r.to_i64()), (Some(-4), Some(1)));
/// ```
pub fn fast_divmod(a: &Integer, b: &Integer) -> Result<(Integer, Integer), DivisionError> {
    if b.is_zero() {
        return Err(DivisionError::ZeroDivisor);
    }
    tracing::trace!(
        dividend_bits = a.bit_len(),
        divisor_bits = b.bit_len(),
        "fast_divmod"
    );
    Ok(floor_divmod(a, b))
}

/// Reduces every sign combination to a non-negative dividend and a positive
/// divisor. `b` must be non-zero.
pub(crate) fn floor_divmod(a: &Integer, b: &Integer) -> (Integer, Integer) {
    if b.is_negative() {
        let (q, r) = floor_divmod(&-a, &-b);
        (q, -r)
    } else if a.is_negative() {
        // a = -(~a) - 1, so a = ~q * b + (b + ~r) where (q, r) = divmod(~a, b).
        let (q, r) = divmod_pos(&complement(a), b);
        (complement(&q), b + &complement(&r))
    } else if a.is_zero() {
        (Integer::zero(), Integer::zero())
    } else {
        divmod_pos(a, b)
    }
}

/// Two's complement `~x = -(x + 1)`.
fn complement(x: &Integer) -> Integer {
    -(x + &Integer::one())
}

/// Divides a non-negative `a` by a positive `b`.
///
/// `a` is cut into base-`2^n` digits, `n` being the bit length of `b`, and
/// the digits are divided from the top, each step being a `2n`-by-`n`
/// division of the running remainder and the next digit.
fn divmod_pos(a: &Integer, b: &Integer) -> (Integer, Integer) {
    let n = b.bit_len();
    let mut digits = int_to_digits(a, n);

    // A top digit below b is already a remainder.
    let mut r = Integer::zero();
    if let Some(top) = digits.pop() {
        if &top < b {
            r = top;
        } else {
            digits.push(top);
        }
    }

    let mut q_digits = Vec::with_capacity(digits.len());
    for digit in digits.into_iter().rev() {
        let (q_digit, rem) = div2n1n(&((r << n) + digit), b, n);
        q_digits.push(q_digit);
        r = rem;
    }
    q_digits.reverse();

    (digits_to_int(&q_digits, n), r)
}

/// Divides a dividend of at most `2n` bits by a divisor of exactly `n` bits.
///
/// Requires `a < 2^n * b`, so that the quotient fits in `n` bits.
fn div2n1n(a: &Integer, b: &Integer, n: usize) -> (Integer, Integer) {
    debug_assert_eq!(b.bit_len(), n, "divisor must have exactly n bits");
    debug_assert!(*a < (b << n), "quotient must fit in n bits");

    if n <= DIV_LIMIT {
        return a.schoolbook_divmod(b);
    }

    if n & 1 == 1 {
        // Pad to an even width; the quotient is unchanged and the remainder
        // doubles.
        let (q, r) = div2n1n(&(a << 1), &(b << 1), n + 1);
        return (q, r >> 1);
    }

    let half = n >> 1;
    let b1 = b >> half;
    let b2 = b.low_bits(half);

    let (q1, r) = div3n2n(&(a >> n), &(a >> half).low_bits(half), b, &b1, &b2, half);
    let (q2, r) = div3n2n(&r, &a.low_bits(half), b, &b1, &b2, half);

    ((q1 << half) + q2, r)
}

/// Divides `a12 * 2^n + a3` (at most `3n` bits) by `b = b1 * 2^n + b2`
/// (exactly `2n` bits).
///
/// Requires `a12 < 2^n * b`, so the quotient fits in `n` bits.
fn div3n2n(
    a12: &Integer,
    a3: &Integer,
    b: &Integer,
    b1: &Integer,
    b2: &Integer,
    n: usize,
) -> (Integer, Integer) {
    let (mut q, r) = if (a12 >> n) == *b1 {
        // The trial quotient saturates at 2^n - 1.
        let q = (Integer::one() << n) - Integer::one();
        let r = a12 - &(b1 << n) + b1;
        (q, r)
    } else {
        div2n1n(a12, b1, n)
    };

    // The trial quotient overestimates by at most 2.
    let mut r = ((r << n) + a3) - &q * b2;
    let mut corrections = 0;
    while r.is_negative() {
        corrections += 1;
        debug_assert!(corrections <= 2, "div3n2n needed more than two corrections");
        q = q - Integer::one();
        r = r + b;
    }
    (q, r)
}

/// Splits a non-negative integer into base-`2^n` digits, least significant
/// first. Zero has no digits.
///
/// The split is recursive, halving the digit range each time, so it costs
/// `O(log k)` passes over the input for `k` digits rather than `k`.
pub fn int_to_digits(a: &Integer, n: usize) -> Vec<Integer> {
    assert!(n > 0, "digit width must be positive");
    debug_assert!(!a.is_negative());
    if a.is_zero() {
        return Vec::new();
    }
    let mut digits = vec![Integer::zero(); a.bit_len().div_ceil(n)];
    split_digits(a.clone(), &mut digits, n);
    digits
}

fn split_digits(x: Integer, digits: &mut [Integer], n: usize) {
    if digits.len() == 1 {
        digits[0] = x;
        return;
    }
    let mid = digits.len() / 2;
    let shift = mid * n;
    let upper = &x >> shift;
    let lower = x - &(&upper << shift);
    let (lo, hi) = digits.split_at_mut(mid);
    split_digits(lower, lo, n);
    split_digits(upper, hi, n);
}

/// Reassembles base-`2^n` digits, least significant first.
///
/// Inverse of [`int_to_digits`]; digits need not be reduced below `2^n`.
pub fn digits_to_int(digits: &[Integer], n: usize) -> Integer {
    match digits {
        [] => Integer::zero(),
        [digit] => digit.clone(),
        _ => {
            let mid = digits.len() / 2;
            (digits_to_int(&digits[mid..], n) << (mid * n)) + digits_to_int(&digits[..mid], n)
        }
    }
}
