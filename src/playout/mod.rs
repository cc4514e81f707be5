//! Random playouts.
//!
//! Drives the engine through whole games the way an external player
//! would: ask for hints, pick one, commit it, pass when stuck. Useful for
//! exercising the engine, generating positions for tests, and benchmarking.
//! Moves are picked uniformly; there is no evaluation or search.

mod runner;

pub use runner::{Playout, PlayoutResult};
