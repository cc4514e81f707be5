//! Passing a turn.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, Result};

/// Records that `actor` passed. Consumes a turn, changes no cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkipMove {
    actor: Color,
}

impl SkipMove {
    /// Create a pass for `actor`.
    #[must_use]
    pub const fn new(actor: Color) -> Self {
        Self { actor }
    }

    /// The player passing.
    #[must_use]
    pub const fn actor(&self) -> Color {
        self.actor
    }

    /// No-op; always succeeds.
    pub fn commit(&self, _board: &mut Board) -> Result<()> {
        Ok(())
    }

    /// Human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} passed.", self.actor)
    }
}
