//! RNG module - deterministic shape selection
//!
//! A small LCG drives catalog draws so a seed reproduces a whole game.
//! Draws are independent and uniform over the catalog.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32 with a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform index in `0..len`. Panics if `len` is zero.
    ///
    /// Taken from the high half of `v * len`: the low bits of a power-of-two
    /// LCG cycle with short periods. Biased draws are rejected and redrawn.
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw from an empty range");
        let len = len as u64;
        let threshold = (1u64 << 32) % len;
        loop {
            let m = self.next_u32() as u64 * len;
            if (m & 0xFFFF_FFFF) >= threshold {
                return (m >> 32) as usize;
            }
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(7), rng2.next_index(7));
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn next_index_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_index(len) < len);
            }
        }
    }

    #[test]
    fn next_index_is_roughly_uniform() {
        let mut rng = SimpleRng::new(7);
        let mut counts = [0u32; 7];
        for _ in 0..70_000 {
            counts[rng.next_index(7)] += 1;
        }
        // Expect 10_000 each; allow a generous 5% band.
        for (i, &c) in counts.iter().enumerate() {
            assert!((9_500..=10_500).contains(&c), "index {} drawn {} times", i, c);
        }
    }

    #[test]
    fn power_of_two_ranges_are_not_periodic() {
        for seed in [1, 42, 12345] {
            for len in [2, 4] {
                let mut rng = SimpleRng::new(seed);
                let draws: Vec<usize> = (0..64).map(|_| rng.next_index(len)).collect();
                for period in 1..=8 {
                    assert!(
                        (0..64 - period).any(|i| draws[i] != draws[i + period]),
                        "seed {} len {} repeats with period {}",
                        seed,
                        len,
                        period
                    );
                }
            }
        }
    }

    #[test]
    fn small_ranges_are_roughly_uniform() {
        let mut rng = SimpleRng::new(3);
        let mut counts = [0u32; 4];
        for _ in 0..40_000 {
            counts[rng.next_index(4)] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            assert!((9_500..=10_500).contains(&c), "index {} drawn {} times", i, c);
        }
    }
}
