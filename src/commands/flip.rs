//! Capture side effect.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, Coord, EngineError, Result};

/// Turns the disc at `target` over.
///
/// Not attributable to a player: its actor is `Color::Empty`, so the board
/// never records it in history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipEffect {
    target: Coord,
}

impl FlipEffect {
    /// Create a flip of the disc at `target`.
    #[must_use]
    pub const fn new(target: Coord) -> Self {
        Self { target }
    }

    /// The cell being flipped.
    #[must_use]
    pub const fn target(&self) -> Coord {
        self.target
    }

    /// Always `Color::Empty`.
    #[must_use]
    pub const fn actor(&self) -> Color {
        Color::Empty
    }

    /// Replace the color at `target` with its opposite.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if `target` is off the grid.
    /// - `InvalidOperation` if the cell is empty.
    pub fn commit(&self, board: &mut Board) -> Result<()> {
        let color = board.get_piece(self.target)?;
        if color == Color::Empty {
            return Err(EngineError::InvalidOperation(self.target));
        }
        board.place_piece(self.target, color.opposite())
    }

    /// Human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("Disc at {} flipped.", self.target)
    }
}
