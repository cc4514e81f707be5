//! Board state: the grid and the command history.
//!
//! ## Copy-then-commit
//!
//! Every mutation commits against a scratch copy and swaps it in only on
//! success. The grid (`im::OrdMap`) and history (`im::Vector`) are
//! persistent structures, so the copy is O(1) with structural sharing and
//! no state is ever aliased mutably between two boards.
//!
//! ## History
//!
//! Only turn-consuming commands (`PlaceMove`, `SkipMove`) are recorded.
//! Flips run as side effects of a placement and are never stored. Turn
//! order and undo are both derived from history.

use im::{OrdMap, Vector};
use rustc_hash::FxHashMap;
use tracing::{debug, instrument, warn};

use crate::commands::{Command, PlaceMove};
use crate::core::{
    Color, Coord, EngineError, Result, BOARD_SIZE, FIRST_PLAYER, STARTING_LAYOUT,
};

use super::outcome::GameOutcome;
use super::scan;

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Every in-bounds coordinate maps to a color; `Empty` included.
    pieces: OrdMap<Coord, Color>,
    /// Committed turn-consuming commands, oldest first.
    history: Vector<Command>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board in the opening position with an empty history.
    #[must_use]
    pub fn new() -> Self {
        let mut pieces: OrdMap<Coord, Color> =
            Coord::all().map(|coord| (coord, Color::Empty)).collect();
        for (coord, color) in STARTING_LAYOUT {
            pieces.insert(coord, color);
        }
        Self {
            pieces,
            history: Vector::new(),
        }
    }

    // === Grid ===

    /// Snapshot of the grid. Changes to the returned map never reach the board.
    #[must_use]
    pub fn pieces(&self) -> OrdMap<Coord, Color> {
        self.pieces.clone()
    }

    /// Iterate over `(coord, color)` pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.pieces.iter().map(|(coord, color)| (*coord, *color))
    }

    /// The color at `coord`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `coord` is outside `[0, BOARD_SIZE)²`.
    pub fn get_piece(&self, coord: Coord) -> Result<Color> {
        if !coord.in_bounds() {
            return Err(EngineError::OutOfBounds(coord));
        }
        Ok(self.pieces.get(&coord).copied().unwrap_or_default())
    }

    /// Overwrite the color at `coord`. Only commands write to the grid.
    pub(crate) fn place_piece(&mut self, coord: Coord, color: Color) -> Result<()> {
        if !coord.in_bounds() {
            return Err(EngineError::OutOfBounds(coord));
        }
        self.pieces.insert(coord, color);
        Ok(())
    }

    /// Disc count per player. Both players are always present; `Empty` is not scored.
    #[must_use]
    pub fn score(&self) -> FxHashMap<Color, usize> {
        let mut score: FxHashMap<Color, usize> =
            Color::PLAYERS.iter().map(|&color| (color, 0)).collect();
        for (_, color) in self.cells() {
            if let Some(count) = score.get_mut(&color) {
                *count += 1;
            }
        }
        score
    }

    // === Turns ===

    /// The player to move: the first player on an empty history, otherwise
    /// the opponent of whoever acted last. Passes count as acting.
    #[must_use]
    pub fn whose_turn(&self) -> Color {
        self.history
            .last()
            .map_or(FIRST_PLAYER, |command| command.actor().opposite())
    }

    /// Number of committed turns.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// Committed commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Command> {
        &self.history
    }

    /// The most recent committed command.
    #[must_use]
    pub fn last_move(&self) -> Option<&Command> {
        self.history.last()
    }

    /// Description of every committed turn, oldest first.
    #[must_use]
    pub fn logs(&self) -> Vec<String> {
        self.history
            .iter()
            .filter(|command| command.is_turn())
            .map(Command::describe)
            .collect()
    }

    // === Moves ===

    /// Every legal move for `color`, one per destination, sorted by destination.
    #[instrument(level = "debug", skip(self))]
    pub fn hints(&self, color: Color) -> Vec<PlaceMove> {
        let hints = scan::hints(self, color);
        debug!(count = hints.len(), "hints");
        hints
    }

    /// The legal move for `color` landing on `target`, if there is one.
    #[must_use]
    pub fn hint_at(&self, color: Color, target: Coord) -> Option<PlaceMove> {
        self.hints(color).into_iter().find(|hint| hint.target() == target)
    }

    /// True if `color` has a legal placement.
    #[must_use]
    pub fn has_moves(&self, color: Color) -> bool {
        scan::has_capture(self, color)
    }

    /// True when neither player can place a disc.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !Color::PLAYERS.iter().any(|&color| self.has_moves(color))
    }

    /// The result once the game is over, `None` while play continues.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_game_over()
            .then(|| GameOutcome::from_score(&self.score()))
    }

    // === Transactions ===

    /// Commit `command` atomically.
    ///
    /// The command runs against a copy of the board. On success the copy
    /// replaces the live state and, if the command consumes a turn, it is
    /// appended to history. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Whatever the command's commit returns.
    #[instrument(level = "debug", skip(self, command))]
    pub fn make_effect(&mut self, command: impl Into<Command>) -> Result<()> {
        let command = command.into();
        let mut scratch = self.clone();
        if let Err(err) = command.commit(&mut scratch) {
            warn!(%err, command = %command, "commit rejected");
            return Err(err);
        }
        if command.is_turn() {
            debug!(turn = scratch.history.len() + 1, command = %command, "committed");
            scratch.history.push_back(command);
        }
        *self = scratch;
        Ok(())
    }

    /// Discard the last `n` turns by replaying the rest from the opening.
    ///
    /// The replay runs on a fresh board and is swapped in only when every
    /// step succeeds.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `n` exceeds the turn count.
    /// - Any error raised while replaying.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self, n: usize) -> Result<()> {
        let available = self.history.len();
        if n > available {
            return Err(EngineError::OutOfRange {
                requested: n,
                available,
            });
        }
        let mut scratch = Board::new();
        for command in self.history.iter().take(available - n) {
            scratch.make_effect(command.clone())?;
        }
        debug!(from = available, to = scratch.turn_count(), "undone");
        *self = scratch;
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (_, color)) in self.cells().enumerate() {
            write!(f, "{}", color.glyph())?;
            if (i + 1) % BOARD_SIZE == 0 {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
