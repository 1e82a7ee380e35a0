//! Deterministic random operands for tests.

use num_traits::Zero;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use longint_integers::Integer;

pub(crate) fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Returns a random non-negative integer with exactly `bits` bits.
pub(crate) fn random_bits(rng: &mut ChaCha8Rng, bits: usize) -> Integer {
    if bits == 0 {
        return Integer::zero();
    }
    let mut acc = Integer::zero();
    for _ in 0..bits.div_ceil(64) {
        acc = (acc << 64) + Integer::from(rng.next_u64());
    }
    acc.low_bits(bits - 1) + Integer::power_of_two(bits - 1)
}

/// Returns a random string of `len` decimal digits without a leading zero.
pub(crate) fn random_digits(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len)
        .map(|i| {
            let lo = u32::from(i == 0 && len > 1);
            let d = lo + rng.next_u32() % (10 - lo);
            char::from(b'0' + d as u8)
        })
        .collect()
}
