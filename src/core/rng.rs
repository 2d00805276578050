//! Deterministic random number generation shared by board setup and dice.
//!
//! ## Key Features
//!
//! - **Seeded once**: one `GameRng` per game configuration, never reseeded per roll
//! - **Deterministic**: same seed produces the same board and the same rolls
//! - **Forkable**: dice get an independent but reproducible stream
//!
//! ```
//! use snakes_and_ladders::core::GameRng;
//!
//! let mut setup = GameRng::new(7);
//! let mut dice_stream = setup.fork();
//!
//! let mut replay = GameRng::new(7);
//! let mut replay_dice = replay.fork();
//!
//! assert_eq!(setup.gen_inclusive(1..=100), replay.gen_inclusive(1..=100));
//! assert_eq!(dice_stream.gen_inclusive(1..=6), replay_dice.gen_inclusive(1..=6));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream threaded explicitly through setup and dice.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a seed drawn once from the OS-seeded thread RNG.
    ///
    /// The drawn seed is kept so the game can be replayed via [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        tracing::debug!(seed, "seeded game rng from entropy");
        Self::new(seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform integer in an inclusive range. The range must be non-empty.
    pub fn gen_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Uniform value in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
