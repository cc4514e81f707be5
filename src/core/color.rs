//! Cell colors.
//!
//! Every cell on the board holds exactly one `Color`. `Empty` is a real
//! value, not an absence: the grid is total over the board's coordinates.
//!
//! `Color` also doubles as the actor marker on commands. Commands acted by
//! `Empty` are side effects (flips) and never consume a turn.

use serde::{Deserialize, Serialize};

/// Tri-state cell marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No disc.
    #[default]
    Empty,
    /// First player.
    Black,
    /// Second player.
    White,
}

impl Color {
    /// Both player colors, in turn order.
    pub const PLAYERS: [Color; 2] = [Color::Black, Color::White];

    /// The other player's color. `Empty` stays `Empty`.
    ///
    /// ```
    /// use reversi_engine::core::Color;
    ///
    /// assert_eq!(Color::Black.opposite(), Color::White);
    /// assert_eq!(Color::White.opposite(), Color::Black);
    /// assert_eq!(Color::Empty.opposite(), Color::Empty);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Empty => Color::Empty,
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// True for `Black` and `White`.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// Single-character cell glyph used by the board's text rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Empty => write!(f, "Empty"),
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
