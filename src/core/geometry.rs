//! Grid coordinates and scan directions.
//!
//! ## Coord
//!
//! A cell address `(x, y)` with `x` growing to the right and `y` growing
//! downward. Components are signed so that stepping off the edge of the
//! board yields a representable (but out-of-bounds) coordinate.
//!
//! Coordinates order row-major: by `y`, then by `x`. Every ordered
//! traversal of the grid in this crate follows that order.
//!
//! ## Direction
//!
//! The eight unit steps a capture line can run along.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::config::BOARD_SIZE;

/// A cell address on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at the top edge.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate. No bounds check is performed.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both components lie in `[0, BOARD_SIZE)`.
    ///
    /// ```
    /// use reversi_engine::core::Coord;
    ///
    /// assert!(Coord::new(0, 7).in_bounds());
    /// assert!(!Coord::new(-1, 3).in_bounds());
    /// assert!(!Coord::new(3, 8).in_bounds());
    /// ```
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        let n = BOARD_SIZE as i32;
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }

    /// The neighboring coordinate one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Iterate over every in-bounds coordinate, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = BOARD_SIZE as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Coord::new(x, y)))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight unit steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All directions, in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The `(dx, dy)` offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}
