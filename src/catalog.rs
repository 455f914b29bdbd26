//! Variant catalogs: the ordered set of payload templates for one
//! corruption category, with uniform selection over them.

use crate::rng::SimRng;

/// Immutable, non-empty collection of variants for a single category.
/// Built once at process start; selection is the only runtime operation.
pub struct VariantCatalog<T> {
    variants: Vec<T>,
}

impl<T> VariantCatalog<T> {
    /// Rejects empty catalogs up front so `pick` is total.
    pub fn new(variants: Vec<T>) -> Self {
        assert!(
            !variants.is_empty(),
            "a corruption catalog needs at least one variant"
        );
        Self { variants }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Uniform pick over the catalog; every call is an independent draw.
    pub fn pick(&self, rng: &SimRng) -> &T {
        &self.variants[rng.index(self.variants.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.variants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "at least one variant")]
    fn empty_catalog_is_rejected() {
        let _ = VariantCatalog::<u8>::new(vec![]);
    }

    #[test]
    fn pick_eventually_hits_every_variant() {
        let catalog = VariantCatalog::new(vec!['a', 'b', 'c', 'd']);
        let rng = SimRng::seeded(3);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let v = catalog.pick(&rng);
            seen[(*v as u8 - b'a') as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn pick_is_roughly_uniform() {
        let catalog = VariantCatalog::new(vec![0usize, 1, 2, 3]);
        let rng = SimRng::seeded(9);
        let mut counts = [0usize; 4];
        let trials = 40_000;
        for _ in 0..trials {
            counts[*catalog.pick(&rng)] += 1;
        }
        for count in counts {
            let share = count as f64 / trials as f64;
            assert!((share - 0.25).abs() < 0.02, "share {share} too far from 0.25");
        }
    }
}
