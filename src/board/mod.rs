//! The board engine.
//!
//! - `Board`: grid, history, transactional commits, undo by replay
//! - `scan`: directional capture scanning and legal-move generation
//! - `GameOutcome`: winner or draw once neither side can move

mod outcome;
pub mod scan;
mod state;

pub use outcome::GameOutcome;
pub use scan::CaptureLine;
pub use state::Board;
