//! Shared random source for every simulator draw.
//!
//! All variant selection, error-code picks, and probability checks draw from
//! one seedable stream handed in at construction, so tests can pin a seed and
//! replay the exact sequence of decisions.

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

pub struct SimRng {
    inner: Mutex<StdRng>,
}

impl SimRng {
    /// Entropy-seeded source for production use.
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed-seed source for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform index into a collection of `len` elements.
    pub fn index(&self, len: usize) -> usize {
        self.lock().gen_range(0..len)
    }

    /// Uniform integer in `[low, high]`, both ends included.
    pub fn range_inclusive(&self, low: u64, high: u64) -> u64 {
        self.lock().gen_range(low..=high)
    }

    /// Bernoulli draw with probability `p` of returning true.
    pub fn chance(&self, p: f64) -> bool {
        self.lock().gen_bool(p)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&self) -> f64 {
        self.lock().gen()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        // Draws never panic while holding the lock, so poisoning cannot occur
        // in practice; recover rather than propagate if it somehow does.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = SimRng::seeded(42);
        let b = SimRng::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.range_inclusive(0, 1000), b.range_inclusive(0, 1000));
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let rng = SimRng::seeded(7);
        for _ in 0..1000 {
            assert!(rng.index(3) < 3);
        }
    }

    #[test]
    fn range_inclusive_covers_both_ends() {
        let rng = SimRng::seeded(11);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..10_000 {
            match rng.range_inclusive(0, 3) {
                0 => seen_low = true,
                3 => seen_high = true,
                _ => {}
            }
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn chance_zero_and_one_are_degenerate() {
        let rng = SimRng::seeded(5);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }
}
