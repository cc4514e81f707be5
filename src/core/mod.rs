//! Core primitives: colors, geometry, configuration, errors, RNG.
//!
//! Everything here is stateless. The board and its commands are built on
//! top of these types.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use color::Color;
pub use config::{PlayoutConfig, BOARD_SIZE, CELL_COUNT, FIRST_PLAYER, STARTING_LAYOUT};
pub use error::{EngineError, Result};
pub use geometry::{Coord, Direction};
pub use rng::{MoveRng, MoveRngState};
