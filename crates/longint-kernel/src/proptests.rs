//! Property-based tests for the kernel operations.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::thresholds::{BITLIM, DIV_LIMIT};
    use crate::{fast_divmod, parse_digits, parse_integer, to_decimal_string, Integer};

    // Strategy for integers up to `max_limbs` 64-bit limbs wide, either sign
    fn int_with_limbs(max_limbs: usize) -> impl Strategy<Value = Integer> {
        (proptest::collection::vec(any::<u64>(), 0..=max_limbs), any::<bool>()).prop_map(
            |(limbs, neg)| {
                let mut acc = Integer::zero();
                for limb in limbs {
                    acc = (acc << 64) + Integer::from(limb);
                }
                if neg {
                    -acc
                } else {
                    acc
                }
            },
        )
    }

    // Dividends wide enough to reach the recursive path against wide divisors
    fn dividend() -> impl Strategy<Value = Integer> {
        int_with_limbs(4 * DIV_LIMIT / 64)
    }

    fn divisor() -> impl Strategy<Value = Integer> {
        prop_oneof![int_with_limbs(2), int_with_limbs(DIV_LIMIT / 64 + 4)]
            .prop_filter("divisor must be non-zero", |b| !b.is_zero())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn divmod_identity(a in dividend(), b in divisor()) {
            let (q, r) = fast_divmod(&a, &b).unwrap();
            prop_assert_eq!(&(&b * &q) + &r, a.clone());
            prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn divmod_matches_schoolbook(a in dividend(), b in divisor()) {
            prop_assert_eq!(fast_divmod(&a, &b).unwrap(), a.schoolbook_divmod(&b));
        }

        #[test]
        fn encode_matches_primitive(n in int_with_limbs(BITLIM / 8)) {
            prop_assert_eq!(to_decimal_string(&n), n.to_string());
        }

        #[test]
        fn decode_inverts_encode(n in int_with_limbs(BITLIM / 4)) {
            let s = to_decimal_string(&n);
            prop_assert_eq!(parse_integer(&s).unwrap(), n.clone());
            prop_assert_eq!(parse_digits(&to_decimal_string(&n.abs())).unwrap(), n.abs());
        }

        #[test]
        fn separators_are_ignored(n in int_with_limbs(8), cut in 0usize..40) {
            let digits = n.abs().to_string();
            let cut = cut.min(digits.len());
            let spaced = format!(" {}_{} ", &digits[..cut], &digits[cut..]);
            prop_assert_eq!(parse_digits(&spaced).unwrap(), n.abs());
        }

        #[test]
        fn rejected_position_is_exact(prefix in "[0-9 _]{0,30}", bad in "[a-zA-Z.,+-]", suffix in "[0-9]{0,10}") {
            let s = format!("{prefix}{bad}{suffix}");
            let err = parse_digits(&s).unwrap_err();
            prop_assert_eq!(err.position, prefix.chars().count() + 1);
        }
    }
}
