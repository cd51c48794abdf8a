use std::collections::HashSet;

use rand::Rng;

use crate::engine::BarArray;
use crate::error::ConfigError;

/// Draws per bar before falling back to picking among unused heights.
const MAX_ATTEMPTS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightRange {
    pub min: u32,
    pub max: u32,
}

impl HeightRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Number of distinct integer heights in the range.
    pub fn available(&self) -> u64 {
        if self.min > self.max {
            0
        } else {
            u64::from(self.max - self.min) + 1
        }
    }

    pub fn contains(&self, height: u32) -> bool {
        (self.min..=self.max).contains(&height)
    }

    pub fn check(&self, count: usize) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        let available = self.available();
        if count as u64 > available {
            return Err(ConfigError::InfeasibleRange {
                count,
                min: self.min,
                max: self.max,
                available,
            });
        }
        Ok(())
    }
}

/// Generate `count` bars with pairwise distinct heights drawn from `range`.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: HeightRange,
) -> Result<BarArray, ConfigError> {
    range.check(count)?;

    let mut used = HashSet::with_capacity(count);
    let mut heights = Vec::with_capacity(count);
    for _ in 0..count {
        let height = draw_unique(rng, range, &used);
        used.insert(height);
        heights.push(height);
    }
    tracing::debug!(count, min = range.min, max = range.max, "generated bars");
    Ok(BarArray::from_heights(heights))
}

fn draw_unique<R: Rng + ?Sized>(rng: &mut R, range: HeightRange, used: &HashSet<u32>) -> u32 {
    for _ in 0..MAX_ATTEMPTS {
        let height = rng.gen_range(range.min..=range.max);
        if !used.contains(&height) {
            return height;
        }
    }
    // `check` guarantees at least one height is still free
    let free: Vec<u32> = (range.min..=range.max)
        .filter(|height| !used.contains(height))
        .collect();
    free[rng.gen_range(0..free.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn heights_are_distinct_and_in_range() {
        let range = HeightRange::new(20, 500);
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let bars = generate(&mut rng, 20, range).unwrap();
            assert_eq!(bars.len(), 20);
            let heights = bars.heights();
            let unique: HashSet<u32> = heights.iter().copied().collect();
            assert_eq!(unique.len(), heights.len());
            assert!(heights.iter().all(|&h| range.contains(h)));
            for (k, bar) in bars.bars().iter().enumerate() {
                assert_eq!(bar.slot, k);
            }
        }
    }

    #[test]
    fn saturated_range_still_terminates() {
        let mut rng = SmallRng::seed_from_u64(3);
        let bars = generate(&mut rng, 6, HeightRange::new(20, 25)).unwrap();
        let mut heights = bars.heights();
        heights.sort_unstable();
        assert_eq!(heights, vec![20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn too_many_bars_fail_fast() {
        let mut rng = SmallRng::seed_from_u64(3);
        let err = generate(&mut rng, 7, HeightRange::new(20, 25)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InfeasibleRange { count: 7, min: 20, max: 25, available: 6 }
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(3);
        let err = generate(&mut rng, 1, HeightRange::new(10, 5)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: 10, max: 5 });
    }

    #[test]
    fn same_seed_same_heights() {
        let range = HeightRange::new(20, 500);
        let a = generate(&mut SmallRng::seed_from_u64(42), 20, range).unwrap();
        let b = generate(&mut SmallRng::seed_from_u64(42), 20, range).unwrap();
        assert_eq!(a, b);
    }
}
