//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the only source of randomness in the engine.
//! It is passed explicitly to every operator, so a run is fully reproducible from its
//! seed and independent runs can execute side by side in the same process.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let column = rng.gen_index(8);
//! assert!(column < 8);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` with the handful of draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// Two generators created from the same seed produce the same sequence, which
    /// makes whole evolution runs reproducible.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws an index uniformly from `0..upper`.
    ///
    /// `upper` must be positive; callers validate sizes before drawing.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws a float uniformly from `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with probability `p`.
    ///
    /// Probabilities of exactly 0 or 1 are decided without consuming randomness.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.gen_unit() < p
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
