//! Engine configuration.
//!
//! Board geometry and the opening layout are compile-time constants: the
//! rules never change between games. The only run-time configuration is
//! `PlayoutConfig`, which drives the random self-play utility in
//! [`crate::playout`].

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::geometry::Coord;

/// Board size (NxN).
pub const BOARD_SIZE: usize = 8;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The player who moves first on an empty history.
pub const FIRST_PLAYER: Color = Color::Black;

/// The four seeded center cells.
///
/// Same colors sit diagonally opposite each other.
pub const STARTING_LAYOUT: [(Coord, Color); 4] = [
    (Coord::new(3, 3), Color::White),
    (Coord::new(4, 3), Color::Black),
    (Coord::new(3, 4), Color::Black),
    (Coord::new(4, 4), Color::White),
];

/// Random playout parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Seed for move selection.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Maximum turns (placements and passes) before the playout stops.
    /// A full game never needs more than `2 * CELL_COUNT`.
    pub max_turns: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_turns: 2 * CELL_COUNT,
        }
    }
}

impl PlayoutConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}
