use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Random source owned by a single conversion.
///
/// Unseeded by default; a fixed seed makes sampling reproducible.
#[derive(Clone, Debug)]
pub struct PointRng {
    inner: StdRng,
}

impl PointRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice from `items`, `None` when empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.inner).copied()
    }

    /// Draw `count` items uniformly with replacement.
    pub fn sample_with_replacement<T: Copy>(&mut self, items: &[T], count: usize) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }
        (0..count).filter_map(|_| self.pick(items)).collect()
    }

    /// Uniform integer in `[0, n)`; `n` must be positive.
    pub fn below(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }

    /// Uniform offset in `[-half, half)`, or 0 when that range is empty.
    pub fn offset(&mut self, half: i32) -> i32 {
        if half <= 0 {
            0
        } else {
            self.inner.gen_range(-half..half)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let items: Vec<u32> = (0..100).collect();
        let a = PointRng::seeded(7).sample_with_replacement(&items, 20);
        let b = PointRng::seeded(7).sample_with_replacement(&items, 20);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn offset_stays_in_half_open_range() {
        let mut rng = PointRng::seeded(1);
        for _ in 0..500 {
            let o = rng.offset(3);
            assert!((-3..3).contains(&o));
        }
        assert_eq!(rng.offset(0), 0);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut rng = PointRng::seeded(3);
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert!(rng.sample_with_replacement(&empty, 10).is_empty());
    }
}
