//! Deterministic random number generation.
//!
//! One `GameRng` drives all randomness in a game: the two shuffles at setup
//! and the weighted discards during play. The same seed always produces the
//! same game, which is what the replay tests rely on.
//!
//! Uses ChaCha8 for speed while keeping a high-quality stream.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded deterministic RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// Used once per process; individual games get seeds via [`gen_seed`]
    /// so each game is reproducible on its own.
    ///
    /// [`gen_seed`]: GameRng::gen_seed
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fresh seed for a subordinate RNG.
    pub fn gen_seed(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick an index with probability proportional to integer weights.
    ///
    /// This is exact multiset sampling: an entry with weight 2 is twice as
    /// likely as one with weight 1. Returns `None` if all weights are zero.
    pub fn choose_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }

        let mut threshold = self.inner.gen_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            if threshold < weight {
                return Some(i);
            }
            threshold -= weight;
        }
        None
    }
}
