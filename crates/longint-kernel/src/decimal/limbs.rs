//! Base-10⁹ limb arithmetic.
//!
//! A coefficient is a little-endian `Vec<u32>` whose limbs are all below
//! `RADIX`. Normalised vectors carry no high zero limbs, so zero is the empty
//! vector. Slices handed to the helpers below may be unnormalised.

use std::cmp::Ordering;

use crate::thresholds::KARATSUBA_THRESHOLD;

/// Decimal digits per limb.
pub const DIGITS_PER_LIMB: usize = 9;

/// Limb radix, `10^DIGITS_PER_LIMB`.
pub const RADIX: u32 = 1_000_000_000;

const RADIX_U64: u64 = RADIX as u64;

const POW10: [u32; DIGITS_PER_LIMB] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

/// Drops high zero limbs.
pub fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Splits a `u128` into limbs.
pub fn from_u128(mut value: u128) -> Vec<u32> {
    let mut limbs = Vec::with_capacity(5);
    while value > 0 {
        limbs.push((value % u128::from(RADIX)) as u32);
        value /= u128::from(RADIX);
    }
    limbs
}

/// Number of decimal digits in a normalised coefficient.
pub fn digit_count(limbs: &[u32]) -> usize {
    match limbs.last() {
        None => 0,
        Some(&top) => (limbs.len() - 1) * DIGITS_PER_LIMB + decimal_width(top),
    }
}

fn decimal_width(limb: u32) -> usize {
    POW10.iter().take_while(|&&p| p <= limb).count().max(1)
}

/// Compares two normalised coefficients.
pub fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Adds `src * RADIX^offset` into `acc`, growing it as needed.
pub fn add_into(acc: &mut Vec<u32>, src: &[u32], offset: usize) {
    if acc.len() < offset + src.len() {
        acc.resize(offset + src.len(), 0);
    }

    let mut carry = 0u32;
    for (slot, &limb) in acc[offset..].iter_mut().zip(src) {
        let t = *slot + limb + carry;
        if t >= RADIX {
            *slot = t - RADIX;
            carry = 1;
        } else {
            *slot = t;
            carry = 0;
        }
    }

    let mut k = offset + src.len();
    while carry != 0 {
        if k == acc.len() {
            acc.push(0);
        }
        let t = acc[k] + carry;
        if t == RADIX {
            acc[k] = 0;
            k += 1;
        } else {
            acc[k] = t;
            carry = 0;
        }
    }
}

/// Returns `a + b`.
pub fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    out.extend_from_slice(long);
    add_into(&mut out, short, 0);
    trim(&mut out);
    out
}

/// Subtracts `b` from `a` in place.
///
/// The caller guarantees `a >= b`.
pub fn sub_in_place(a: &mut Vec<u32>, b: &[u32]) {
    debug_assert!(b.iter().skip(a.len()).all(|&limb| limb == 0));

    let mut borrow = 0i64;
    for (i, slot) in a.iter_mut().enumerate() {
        let sub = b.get(i).copied().unwrap_or(0);
        if sub == 0 && borrow == 0 && i >= b.len() {
            break;
        }
        let mut t = i64::from(*slot) - i64::from(sub) - borrow;
        if t < 0 {
            t += i64::from(RADIX);
            borrow = 1;
        } else {
            borrow = 0;
        }
        *slot = t as u32;
    }
    debug_assert_eq!(borrow, 0, "limb subtraction underflow");
    trim(a);
}

/// Multiplies in place by a single factor below `RADIX`.
pub fn mul_small(a: &mut Vec<u32>, factor: u32) {
    if factor == 0 {
        a.clear();
        return;
    }
    let mut carry = 0u64;
    for slot in a.iter_mut() {
        let t = u64::from(*slot) * u64::from(factor) + carry;
        *slot = (t % RADIX_U64) as u32;
        carry = t / RADIX_U64;
    }
    if carry > 0 {
        a.push(carry as u32);
    }
}

/// Divides in place by a non-zero single divisor, returning the remainder.
pub fn div_small(a: &mut Vec<u32>, divisor: u32) -> u32 {
    debug_assert!(divisor != 0);
    let mut rem = 0u64;
    for slot in a.iter_mut().rev() {
        let t = rem * RADIX_U64 + u64::from(*slot);
        *slot = (t / u64::from(divisor)) as u32;
        rem = t % u64::from(divisor);
    }
    trim(a);
    rem as u32
}

/// Multiplies by `10^digits`.
pub fn shift_up(a: &mut Vec<u32>, digits: usize) {
    if a.is_empty() || digits == 0 {
        return;
    }
    mul_small(a, POW10[digits % DIGITS_PER_LIMB]);
    let whole = digits / DIGITS_PER_LIMB;
    if whole > 0 {
        a.splice(0..0, std::iter::repeat(0).take(whole));
    }
}

/// Divides by `10^digits`, discarding the remainder.
///
/// Returns true if a non-zero digit was discarded.
pub fn shift_down(a: &mut Vec<u32>, digits: usize) -> bool {
    let whole = digits / DIGITS_PER_LIMB;
    if whole >= a.len() {
        let lost = a.iter().any(|&limb| limb != 0);
        a.clear();
        return lost;
    }
    let mut lost = a[..whole].iter().any(|&limb| limb != 0);
    a.drain(..whole);
    let rem = div_small(a, POW10[digits % DIGITS_PER_LIMB]);
    lost |= rem != 0;
    lost
}

/// Multiplies two coefficients.
///
/// Uses schoolbook multiplication while either operand is shorter than
/// `KARATSUBA_THRESHOLD` limbs and Karatsuba above it.
pub fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // Base case
    if short.len() < KARATSUBA_THRESHOLD {
        return schoolbook_mul(long, short);
    }

    let half = long.len().div_ceil(2);
    if short.len() <= half {
        return unbalanced_mul(long, short);
    }

    // Split: a = a0 + a1*R^half, b = b0 + b1*R^half
    let (a0, a1) = long.split_at(half);
    let (b0, b1) = short.split_at(half);

    // Compute z0 = a0*b0, z2 = a1*b1
    let z0 = mul(a0, b0);
    let z2 = mul(a1, b1);

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let mut z1 = mul(&add(a0, a1), &add(b0, b1));
    sub_in_place(&mut z1, &z0);
    sub_in_place(&mut z1, &z2);

    // Combine: result = z0 + z1*R^half + z2*R^(2*half)
    let mut result = Vec::with_capacity(long.len() + short.len() + 1);
    result.extend_from_slice(&z0);
    add_into(&mut result, &z1, half);
    add_into(&mut result, &z2, 2 * half);
    trim(&mut result);
    result
}

/// Multiplies a long operand by a much shorter one, one short-sized chunk at
/// a time, so that every partial product is balanced.
fn unbalanced_mul(long: &[u32], short: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(long.len() + short.len());
    for (i, chunk) in long.chunks(short.len()).enumerate() {
        let part = mul(chunk, short);
        add_into(&mut result, &part, i * short.len());
    }
    trim(&mut result);
    result
}

/// Schoolbook multiplication: O(n²).
pub fn schoolbook_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let t = u64::from(result[i + j]) + u64::from(x) * u64::from(y) + carry;
            result[i + j] = (t % RADIX_U64) as u32;
            carry = t / RADIX_U64;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let t = u64::from(result[k]) + carry;
            result[k] = (t % RADIX_U64) as u32;
            carry = t / RADIX_U64;
            k += 1;
        }
    }

    trim(&mut result);
    result
}

/// Renders a normalised coefficient as decimal digits.
pub fn write_digits(limbs: &[u32], out: &mut String) {
    use std::fmt::Write;

    let Some((&top, rest)) = limbs.split_last() else {
        out.push('0');
        return;
    };
    out.reserve(digit_count(limbs));
    // Writing into a String cannot fail.
    let _ = write!(out, "{top}");
    for limb in rest.iter().rev() {
        let _ = write!(out, "{limb:09}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limbs_of(s: &str) -> Vec<u32> {
        let mut limbs: Vec<u32> = s
            .as_bytes()
            .rchunks(DIGITS_PER_LIMB)
            .map(|chunk| std::str::from_utf8(chunk).unwrap().parse().unwrap())
            .collect();
        trim(&mut limbs);
        limbs
    }

    fn render(limbs: &[u32]) -> String {
        let mut s = String::new();
        write_digits(limbs, &mut s);
        s
    }

    #[test]
    fn test_from_u128_and_render() {
        assert_eq!(render(&from_u128(0)), "0");
        assert_eq!(render(&from_u128(1_000_000_000)), "1000000000");
        assert_eq!(render(&from_u128(u128::MAX)), u128::MAX.to_string());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(&[]), 0);
        assert_eq!(digit_count(&from_u128(9)), 1);
        assert_eq!(digit_count(&from_u128(10)), 2);
        assert_eq!(digit_count(&from_u128(999_999_999)), 9);
        assert_eq!(digit_count(&from_u128(1_000_000_000)), 10);
    }

    #[test]
    fn test_add_carries_across_limbs() {
        let a = limbs_of("999999999999999999");
        let b = limbs_of("1");
        assert_eq!(render(&add(&a, &b)), "1000000000000000000");
    }

    #[test]
    fn test_sub_in_place_borrows() {
        let mut a = limbs_of("1000000000000000000");
        sub_in_place(&mut a, &limbs_of("1"));
        assert_eq!(render(&a), "999999999999999999");
        sub_in_place(&mut a, &limbs_of("999999999999999999"));
        assert!(a.is_empty());
    }

    #[test]
    fn test_shift_up_and_down() {
        let mut a = limbs_of("12345");
        shift_up(&mut a, 13);
        assert_eq!(render(&a), "123450000000000000");
        assert!(!shift_down(&mut a, 13));
        assert_eq!(render(&a), "12345");
        assert!(shift_down(&mut a, 2));
        assert_eq!(render(&a), "123");
        assert!(shift_down(&mut a, 30));
        assert!(a.is_empty());
    }

    #[test]
    fn test_small_mul_div() {
        let mut a = limbs_of("123456789123456789");
        mul_small(&mut a, 7);
        assert_eq!(render(&a), "864197523864197523");
        assert_eq!(div_small(&mut a, 7), 0);
        assert_eq!(render(&a), "123456789123456789");
        assert_eq!(div_small(&mut a, 10), 9);
    }

    #[test]
    fn test_schoolbook_small() {
        let c = schoolbook_mul(&limbs_of("123456789012"), &limbs_of("987654321098"));
        assert_eq!(render(&c), (123_456_789_012u128 * 987_654_321_098u128).to_string());
    }

    #[test]
    fn test_karatsuba_matches_schoolbook() {
        // Large enough to trigger Karatsuba and the unbalanced split
        let a: Vec<u32> = (0..300u32).map(|i| (i * 7_919 + 13) % RADIX).collect();
        let b: Vec<u32> = (0..170u32).map(|i| (i * 104_729 + 5) % RADIX).collect();
        let c: Vec<u32> = (0..40u32).map(|i| RADIX - 1 - i).collect();

        assert_eq!(mul(&a, &b), schoolbook_mul(&a, &b));
        assert_eq!(mul(&b, &a), schoolbook_mul(&a, &b));
        assert_eq!(mul(&a, &c), schoolbook_mul(&a, &c));
        assert_eq!(mul(&a, &a), schoolbook_mul(&a, &a));
    }

    #[test]
    fn test_mul_by_zero() {
        assert!(mul(&limbs_of("123"), &[]).is_empty());
        assert!(mul(&[0; 40], &[1; 40]).is_empty());
    }
}
