//! Property-based tests for the integer primitive.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating wide integers from a handful of 64-bit limbs
    fn wide_int() -> impl Strategy<Value = Integer> {
        (proptest::collection::vec(any::<u64>(), 0..6), any::<bool>()).prop_map(|(limbs, neg)| {
            let mut acc = Integer::zero();
            for limb in limbs {
                acc = (acc << 64) + Integer::from(limb);
            }
            if neg {
                -acc
            } else {
                acc
            }
        })
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = Integer> {
        wide_int().prop_filter("divisor must be non-zero", |b| !b.is_zero())
    }

    proptest! {
        #[test]
        fn schoolbook_divmod_identity(a in wide_int(), b in non_zero_int()) {
            let (q, r) = a.schoolbook_divmod(&b);
            prop_assert_eq!(&(&b * &q) + &r, a);
            prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn shift_roundtrip(a in wide_int(), s in 0usize..300) {
            let a = a.abs();
            prop_assert_eq!((&a << s) >> s, a);
        }

        #[test]
        fn low_bits_split(a in wide_int(), s in 0usize..300) {
            let a = a.abs();
            let hi = &a >> s;
            let lo = a.low_bits(s);
            prop_assert!(lo.bit_len() <= s);
            prop_assert_eq!((hi << s) + lo, a);
        }

        #[test]
        fn parse_digit_run_matches_display(a in wide_int()) {
            let a = a.abs();
            prop_assert_eq!(Integer::parse_digit_run(&a.to_string()), a);
        }
    }
}
