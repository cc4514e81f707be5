//! The closed set of board commands.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, Result};

use super::{FlipEffect, PlaceMove, SkipMove};

/// A state transition on a [`Board`].
///
/// ## Turn-consuming commands
///
/// - `Place`: a player puts a disc down and captures
/// - `Skip`: a player passes
///
/// ## Side effects
///
/// - `Flip`: one captured disc turned over; actor is `Color::Empty` and it
///   never enters history
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Place(PlaceMove),
    Flip(FlipEffect),
    Skip(SkipMove),
}

impl Command {
    /// The acting player, or `Color::Empty` for side effects.
    #[must_use]
    pub fn actor(&self) -> Color {
        match self {
            Command::Place(place) => place.actor(),
            Command::Flip(flip) => flip.actor(),
            Command::Skip(skip) => skip.actor(),
        }
    }

    /// True if committing this command consumes a turn.
    #[must_use]
    pub fn is_turn(&self) -> bool {
        self.actor().is_player()
    }

    /// Apply this command to `board`.
    ///
    /// Callers wanting all-or-nothing semantics go through
    /// [`Board::make_effect`], which commits against a scratch copy.
    pub fn commit(&self, board: &mut Board) -> Result<()> {
        match self {
            Command::Place(place) => place.commit(board),
            Command::Flip(flip) => flip.commit(board),
            Command::Skip(skip) => skip.commit(board),
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Command::Place(place) => place.describe(),
            Command::Flip(flip) => flip.describe(),
            Command::Skip(skip) => skip.describe(),
        }
    }
}

impl From<PlaceMove> for Command {
    fn from(place: PlaceMove) -> Self {
        Command::Place(place)
    }
}

impl From<FlipEffect> for Command {
    fn from(flip: FlipEffect) -> Self {
        Command::Flip(flip)
    }
}

impl From<SkipMove> for Command {
    fn from(skip: SkipMove) -> Self {
        Command::Skip(skip)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
