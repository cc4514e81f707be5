//! Final game result.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The player holding more discs.
    Winner(Color),
    /// Equal disc counts.
    Draw,
}

impl GameOutcome {
    /// Decide the result from a disc count. Missing players count as zero.
    #[must_use]
    pub fn from_score(score: &FxHashMap<Color, usize>) -> Self {
        let count = |color| score.get(&color).copied().unwrap_or(0);
        let (black, white) = (count(Color::Black), count(Color::White));
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Color::Black),
            std::cmp::Ordering::Less => GameOutcome::Winner(Color::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Check if `color` won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameOutcome::Winner(winner) if *winner == color)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(color) => write!(f, "{color} wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
