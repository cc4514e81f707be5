//! Random self-play driver.

use tracing::{debug, info, instrument};

use crate::board::{Board, GameOutcome};
use crate::commands::SkipMove;
use crate::core::{MoveRng, PlayoutConfig, Result};

/// A finished (or capped) playout.
#[derive(Clone, Debug)]
pub struct PlayoutResult {
    /// Final position with full history.
    pub board: Board,
    /// `Some` if the game reached its natural end.
    pub outcome: Option<GameOutcome>,
    /// Turns committed, passes included.
    pub turns: usize,
}

/// Plays games by picking uniformly among legal moves.
///
/// The side to move passes when it has no placement. Play stops when
/// neither side can move or the turn cap is reached.
pub struct Playout {
    config: PlayoutConfig,
    rng: MoveRng,
}

impl Playout {
    /// Create a driver from `config`.
    #[must_use]
    pub fn new(config: PlayoutConfig) -> Self {
        let rng = MoveRng::new(config.seed);
        Self { config, rng }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &PlayoutConfig {
        &self.config
    }

    /// Play one game from the opening position.
    ///
    /// # Errors
    ///
    /// Propagates any commit failure. Moves come from `Board::hints`, so
    /// this only happens if the engine itself is inconsistent.
    #[instrument(level = "debug", skip(self), fields(seed = self.config.seed))]
    pub fn run(&mut self) -> Result<PlayoutResult> {
        let mut board = Board::new();
        while board.turn_count() < self.config.max_turns && !board.is_game_over() {
            let player = board.whose_turn();
            let hints = board.hints(player);
            match self.rng.choose(&hints) {
                Some(chosen) => board.make_effect(chosen.clone())?,
                None => board.make_effect(SkipMove::new(player))?,
            }
        }

        let outcome = board.outcome();
        let turns = board.turn_count();
        debug!(turns, ?outcome, "playout finished");
        Ok(PlayoutResult {
            board,
            outcome,
            turns,
        })
    }

    /// Play `count` games, each on its own forked RNG stream.
    ///
    /// # Errors
    ///
    /// Stops at the first failing game.
    pub fn run_batch(&mut self, count: usize) -> Result<Vec<PlayoutResult>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            let mut game = Playout {
                config: self.config.clone(),
                rng: self.rng.fork(),
            };
            results.push(game.run()?);
        }
        info!(games = count, "batch finished");
        Ok(results)
    }
}
