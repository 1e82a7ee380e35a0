//! Memoised power tables.
//!
//! Both decimal conversions multiply by large powers of a small base over and
//! over. A `PowerCache` stores each power once, keyed by its exponent. Entries
//! are pure functions of their key, so concurrent construction is resolved by
//! keeping whichever value was published first and dropping the duplicate.

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::{smallvec, SmallVec};
use std::hash::Hash;
use std::sync::Arc;

use longint_integers::Integer;

/// A thread-safe cache of powers indexed by exponent.
pub struct PowerCache<K, V> {
    entries: RwLock<FxHashMap<K, Arc<V>>>,
}

impl<K: Copy + Eq + Hash, V> PowerCache<K, V> {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Looks up a power by exponent.
    pub fn get(&self, key: K) -> Option<Arc<V>> {
        self.entries.read().get(&key).cloned()
    }

    /// Publishes a power, returning the value now stored under `key`.
    ///
    /// If another value was published first it wins and `value` is dropped.
    pub fn publish(&self, key: K, value: V) -> Arc<V> {
        let mut entries = self.entries.write();
        entries.entry(key).or_insert_with(|| Arc::new(value)).clone()
    }

    /// Returns the power for `key`, computing it with `compute` on a miss.
    ///
    /// `compute` runs without holding the lock, so it may itself consult the
    /// cache for smaller exponents.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some(value) = self.get(key) {
            return value;
        }
        self.publish(key, compute())
    }

    /// Returns the number of cached powers.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clears the cache.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K: Copy + Eq + Hash, V> Default for PowerCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache of `5^(2^k)` keyed by `k`, used by the decimal decoder.
///
/// Since `10^(2^k) = 5^(2^k) * 2^(2^k)`, multiplying by a power of ten reduces
/// to one multiplication by a cached power of five and a shift.
#[derive(Default)]
pub struct Pow5Cache {
    powers: PowerCache<u32, Integer>,
}

impl Pow5Cache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `5^(2^k)`.
    ///
    /// Built by repeated squaring from `5^1`; every intermediate square is
    /// cached along the way.
    pub fn pow5(&self, k: u32) -> Arc<Integer> {
        self.powers.get_or_insert_with(k, || match k {
            0 => Integer::new(5),
            _ => self.pow5(k - 1).square(),
        })
    }

    /// Returns the number of cached powers.
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    /// Returns true if no power has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// Drops every cached power.
    pub fn clear(&self) {
        self.powers.clear();
    }
}

/// Collects every split width `w >> 1` that halving `width` produces on the
/// way down to `limit`, in ascending order.
///
/// A recursion that splits `w` into `w >> 1` and `w - (w >> 1)` meets at most
/// two distinct widths per level, so the result has `O(log width)` entries.
pub fn split_widths(width: usize, limit: usize) -> SmallVec<[usize; 64]> {
    let mut needed: SmallVec<[usize; 64]> = SmallVec::new();
    let mut pending: SmallVec<[usize; 8]> = smallvec![width];
    let mut seen = FxHashSet::default();

    while let Some(w) = pending.pop() {
        if w <= limit || !seen.insert(w) {
            continue;
        }
        let lo = w >> 1;
        needed.push(lo);
        pending.push(lo);
        pending.push(w - lo);
    }

    needed.sort_unstable();
    needed.dedup();
    tracing::debug!(width, limit, widths = needed.len(), "split widths");
    needed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_publish_keeps_first_value() {
        let cache: PowerCache<u32, u64> = PowerCache::new();
        assert!(cache.is_empty());
        assert_eq!(*cache.publish(3, 8), 8);
        assert_eq!(*cache.publish(3, 99), 8);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(3).is_some());
        cache.clear();
        assert!(cache.get(3).is_none());
    }

    #[test]
    fn test_get_or_insert_with_computes_once() {
        let cache: PowerCache<usize, u64> = PowerCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = cache.get_or_insert_with(10, || {
                calls += 1;
                1 << 10
            });
            assert_eq!(*v, 1024);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_compute_may_reenter_cache() {
        fn pow3(cache: &PowerCache<u32, u64>, k: u32) -> Arc<u64> {
            cache.get_or_insert_with(k, || if k == 0 { 1 } else { 3 * *pow3(cache, k - 1) })
        }

        let cache = PowerCache::new();
        assert_eq!(*pow3(&cache, 20), 3u64.pow(20));
        assert_eq!(cache.len(), 21);
        assert_eq!(*pow3(&cache, 7), 3u64.pow(7));
        assert_eq!(cache.len(), 21);
    }

    #[test]
    fn test_split_widths() {
        assert!(split_widths(100, 128).is_empty());
        assert_eq!(split_widths(129, 128).as_slice(), &[64]);
        assert_eq!(split_widths(1001, 128).as_slice(), &[125, 250, 500]);
        let widths = split_widths(1 << 20, 128);
        assert_eq!(widths.len(), 13);
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_pow5_values() {
        let cache = Pow5Cache::new();
        assert_eq!(*cache.pow5(0), Integer::new(5));
        assert_eq!(*cache.pow5(1), Integer::new(25));
        assert_eq!(*cache.pow5(2), Integer::new(625));
        assert_eq!(*cache.pow5(7), Integer::new(5).pow(128));
        assert_eq!(cache.len(), 8);
    }

    #[test]
    fn test_pow5_independent_of_call_order() {
        let forward = Pow5Cache::new();
        for k in 0..10 {
            forward.pow5(k);
        }
        let backward = Pow5Cache::new();
        for k in (0..10).rev() {
            backward.pow5(k);
        }
        for k in 0..10 {
            assert_eq!(forward.pow5(k), backward.pow5(k));
        }
    }

    #[test]
    fn test_pow5_concurrent_construction() {
        let cache = Pow5Cache::new();
        let expected = Integer::new(5).pow(1 << 12);
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(*cache.pow5(12), expected));
            }
        });
        assert_eq!(cache.len(), 13);
    }
}
