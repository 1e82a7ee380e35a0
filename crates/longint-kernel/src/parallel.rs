//! Fork-join for the two independent halves of a conversion.
//!
//! With the `parallel` feature, halves wider than `PARALLEL_THRESHOLD` bits
//! are handed to rayon's work-stealing pool. Without it, or below the
//! threshold, both run in order on the calling thread.

#[cfg(feature = "parallel")]
use crate::thresholds::PARALLEL_THRESHOLD;

/// Runs `left` and `right`, possibly concurrently, for an operand of `bits` bits.
#[cfg(feature = "parallel")]
pub(crate) fn join<A, B, RA, RB>(bits: usize, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if bits > PARALLEL_THRESHOLD {
        rayon::join(left, right)
    } else {
        (left(), right())
    }
}

/// Runs `left` then `right`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn join<A, B, RA, RB>(_bits: usize, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (left(), right())
}
