//! Move generation.
//!
//! From every disc of the requesting color, walk outward in each of the
//! eight directions. A direction yields a capture line when the walk
//! crosses one or more opposing discs and then lands on an empty cell; that
//! empty cell is the move's destination.
//!
//! Walks that leave the grid, stop on the mover's own color, or stop on an
//! empty cell without crossing anything yield nothing.
//!
//! Lines are produced in a fixed order: origins row-major, then
//! `Direction::ALL` order. [`hints`] merges all lines that share a
//! destination into one `PlaceMove`, returned sorted by destination.

use std::collections::BTreeMap;

use tracing::trace;

use crate::commands::{FlipEffect, FlipList, PlaceMove};
use crate::core::{Color, Coord, Direction};

use super::Board;

/// One (origin, direction) capture found by the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureLine {
    /// Existing disc the walk started from.
    pub origin: Coord,
    /// Direction walked.
    pub direction: Direction,
    /// Empty cell where the walk stopped.
    pub destination: Coord,
    /// Opposing discs crossed, nearest to `origin` first.
    pub flips: FlipList,
}

/// Walk state: the cell under inspection and everything crossed so far.
struct Path {
    current: Coord,
    crossed: FlipList,
}

impl Path {
    fn start(origin: Coord, direction: Direction) -> Self {
        Self {
            current: origin.step(direction),
            crossed: FlipList::new(),
        }
    }

    fn advance(mut self, direction: Direction) -> Self {
        self.crossed.push(FlipEffect::new(self.current));
        self.current = self.current.step(direction);
        self
    }
}

fn walk(board: &Board, expect: Color, direction: Direction, path: Path) -> Option<Path> {
    let color = board.get_piece(path.current).ok()?;
    if color == expect {
        return walk(board, expect, direction, path.advance(direction));
    }
    if color == Color::Empty && !path.crossed.is_empty() {
        return Some(path);
    }
    None
}

/// Lazily scan every capture line available to `color`.
pub fn lines(board: &Board, color: Color) -> impl Iterator<Item = CaptureLine> + '_ {
    let expect = color.opposite();
    board
        .cells()
        .filter(move |(_, cell)| color.is_player() && *cell == color)
        .flat_map(move |(origin, _)| {
            Direction::ALL.into_iter().filter_map(move |direction| {
                let path = walk(board, expect, direction, Path::start(origin, direction))?;
                trace!(%origin, ?direction, destination = %path.current, "capture line");
                Some(CaptureLine {
                    origin,
                    direction,
                    destination: path.current,
                    flips: path.crossed,
                })
            })
        })
}

/// Every capture line for `color`, one per (origin, direction), unmerged.
#[must_use]
pub fn capture_lines(board: &Board, color: Color) -> Vec<CaptureLine> {
    lines(board, color).collect()
}

/// Legal moves for `color`, one per destination, sorted by destination.
#[must_use]
pub fn hints(board: &Board, color: Color) -> Vec<PlaceMove> {
    let mut merged: BTreeMap<Coord, PlaceMove> = BTreeMap::new();
    for line in lines(board, color) {
        match merged.get_mut(&line.destination) {
            Some(existing) => existing.extend_flips(line.flips),
            None => {
                merged.insert(
                    line.destination,
                    PlaceMove::new(color, line.destination, line.flips),
                );
            }
        }
    }
    merged.into_values().collect()
}

/// True if `color` has at least one legal move.
#[must_use]
pub fn has_capture(board: &Board, color: Color) -> bool {
    lines(board, color).next().is_some()
}
