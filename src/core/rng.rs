//! Deterministic random move selection for playouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical game
//! - **Forkable**: Independent, reproducible streams for batches of games
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use reversi_engine::core::MoveRng;
//!
//! let mut rng = MoveRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let moves = ["a", "b", "c"];
//! assert!(game_rng.choose(&moves).is_some());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to pick among legal moves.
///
/// ChaCha8 keeps streams stable across platforms and releases.
#[derive(Clone, Debug)]
pub struct MoveRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl MoveRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.gen_index(slice.len());
        slice.get(idx)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MoveRngState {
        MoveRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MoveRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing a playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
