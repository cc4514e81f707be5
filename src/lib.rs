//! # reversi-engine
//!
//! Rules engine for a two-player disk-flipping game on a fixed 8x8 grid.
//!
//! ## Design Principles
//!
//! 1. **Commands**: Every state change is a `Command` (`PlaceMove`,
//!    `FlipEffect`, `SkipMove`). Drivers never build placements themselves;
//!    they pick one from `Board::hints`.
//!
//! 2. **Copy-then-commit**: A command commits against a scratch copy of the
//!    board and is swapped in only on success. Failed commits are no-ops.
//!
//! 3. **History is the source of truth**: Turn order is derived from the
//!    last actor, and undo replays the retained history from the opening.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im` makes the
//!   scratch copy per commit cheap.
//!
//! ## Modules
//!
//! - `core`: Colors, coordinates, directions, configuration, errors, RNG
//! - `commands`: The command sum type and its three variants
//! - `board`: Board state, move generation, undo, scoring
//! - `playout`: Random self-play driver
//!
//! ## Example
//!
//! ```
//! use reversi_engine::{Board, Color, Coord};
//!
//! let mut board = Board::new();
//! let hint = board.hint_at(Color::Black, Coord::new(3, 2)).unwrap();
//! board.make_effect(hint).unwrap();
//!
//! assert_eq!(board.whose_turn(), Color::White);
//! assert_eq!(board.score()[&Color::Black], 4);
//!
//! board.undo(1).unwrap();
//! assert_eq!(board, Board::new());
//! ```

pub mod board;
pub mod commands;
pub mod core;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    Color, Coord, Direction,
    EngineError, Result,
    MoveRng, MoveRngState, PlayoutConfig,
    BOARD_SIZE, FIRST_PLAYER,
};

pub use crate::commands::{Command, FlipEffect, PlaceMove, SkipMove};

pub use crate::board::{Board, CaptureLine, GameOutcome};

pub use crate::playout::{Playout, PlayoutResult};
