//! Board commands.
//!
//! Every change to a board is a command:
//! - `PlaceMove`: put a disc down, carrying the flips it triggers
//! - `FlipEffect`: turn one captured disc over
//! - `SkipMove`: pass
//!
//! `Command` is the closed sum over the three. Each variant knows its
//! actor, how to commit itself against a board, and how to describe itself.

mod command;
mod flip;
mod place;
mod skip;

pub use command::Command;
pub use flip::FlipEffect;
pub use place::{FlipList, PlaceMove};
pub use skip::SkipMove;
