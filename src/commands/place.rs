//! Disc placement with its captures.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Color, Coord, Result};

use super::FlipEffect;

/// Flip list storage. Most moves capture a handful of discs.
pub type FlipList = SmallVec<[FlipEffect; 8]>;

/// Places `actor`'s disc at `target`, then applies `flips` in order.
///
/// Moves are produced by [`Board::hints`]; drivers pick one rather than
/// building their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceMove {
    actor: Color,
    target: Coord,
    flips: FlipList,
}

impl PlaceMove {
    /// Create a placement.
    #[must_use]
    pub fn new(actor: Color, target: Coord, flips: impl IntoIterator<Item = FlipEffect>) -> Self {
        Self {
            actor,
            target,
            flips: flips.into_iter().collect(),
        }
    }

    /// The player placing the disc.
    #[must_use]
    pub const fn actor(&self) -> Color {
        self.actor
    }

    /// The destination cell.
    #[must_use]
    pub const fn target(&self) -> Coord {
        self.target
    }

    /// The captures this move triggers, in application order.
    #[must_use]
    pub fn flips(&self) -> &[FlipEffect] {
        &self.flips
    }

    /// Number of discs captured.
    #[must_use]
    pub fn score(&self) -> usize {
        self.flips.len()
    }

    /// Append the flips of another capture line to the same destination.
    pub(crate) fn extend_flips(&mut self, flips: impl IntoIterator<Item = FlipEffect>) {
        self.flips.extend(flips);
    }

    /// Write the disc, then commit each flip through the board's
    /// transactional path. Any failing flip fails the whole placement.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for an off-grid target, or whatever a flip returns.
    pub fn commit(&self, board: &mut Board) -> Result<()> {
        board.place_piece(self.target, self.actor)?;
        for flip in &self.flips {
            board.make_effect(*flip)?;
        }
        Ok(())
    }

    /// Human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} placed at {}, flipping {}.",
            self.actor,
            self.target,
            self.flips.len()
        )
    }
}
