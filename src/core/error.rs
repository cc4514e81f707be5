//! Engine errors.
//!
//! All errors are local and recoverable. A failed `make_effect` or `undo`
//! leaves the board exactly as it was, so callers may retry with other input.

use super::geometry::Coord;

/// Error returned by fallible board and command operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Coordinate lies outside the grid.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    /// Attempted to flip a cell that holds no disc.
    #[error("invalid operation: cannot flip empty cell {0}")]
    InvalidOperation(Coord),

    /// Undo asked for more steps than the history holds.
    #[error("cannot undo {requested} turns, history holds {available}")]
    OutOfRange { requested: usize, available: usize },
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
