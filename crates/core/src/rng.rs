//! RNG module - deterministic seeding for new grids
//!
//! A small LCG keeps seeding reproducible from a single `u32`, so a board can
//! be replayed by passing the same seed again.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have short periods (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Returns true with the given probability in percent (clamped to 100)
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        for _ in 0..10 {
            assert_eq!(zero.next_u32(), one.next_u32());
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(3) < 3);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..200 {
            assert!(!rng.chance(0));
            assert!(rng.chance(100));
            assert!(rng.chance(250));
        }
    }

    #[test]
    fn test_chance_half_is_roughly_balanced() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..10_000).filter(|_| rng.chance(50)).count();
        assert!((4_000..6_000).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_chance_does_not_alternate() {
        // Bit 0 of the raw state alternates; chance() must not inherit that.
        let mut rng = SimpleRng::new(1);
        let draws: Vec<bool> = (0..64).map(|_| rng.chance(50)).collect();
        let alternating = draws.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
    }
}
