//! Hex coordinate system using axial coordinates (q, r).
//!
//! The grid is unbounded: pieces may sit at any coordinate, and the centre
//! `(0, 0)` is only special in that the first piece of a game goes there.
//!
//! Directions are kept as an ordered ring so that `i + 1` and `i - 1`
//! (mod 6) name the two directions flanking direction `i`. The slide rule
//! and the perimeter tracer both lean on that ordering.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// The six unit steps, in rotational order starting from East.
///
/// Consecutive entries are themselves neighbours, and
/// `DIRECTIONS[i] + DIRECTIONS[i + 2] == DIRECTIONS[i + 1]` (indices mod 6).
pub const DIRECTIONS: [HexCoord; 6] = [
    HexCoord::new(1, 0),  // East
    HexCoord::new(1, -1), // NorthEast
    HexCoord::new(0, -1), // NorthWest
    HexCoord::new(-1, 0), // West
    HexCoord::new(-1, 1), // SouthWest
    HexCoord::new(0, 1),  // SouthEast
];

/// Index of the direction after `i` in rotational order.
pub const fn next_direction(i: usize) -> usize {
    (i + 1) % 6
}

/// Index of the direction before `i` in rotational order.
pub const fn prev_direction(i: usize) -> usize {
    (i + 5) % 6
}

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// The centre of the board, where the opening piece is placed.
    pub const CENTRE: HexCoord = HexCoord::new(0, 0);

    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighbouring hexes in the order of [`DIRECTIONS`]
    pub fn neighbors(&self) -> [HexCoord; 6] {
        DIRECTIONS.map(|d| *self + d)
    }

    /// Get the neighbour in direction `direction` (taken mod 6)
    pub fn neighbor(&self, direction: usize) -> HexCoord {
        *self + DIRECTIONS[direction % 6]
    }

    /// Integer multiple of this vector
    pub const fn scale(self, factor: i32) -> HexCoord {
        HexCoord::new(self.q * factor, self.r * factor)
    }

    /// Index of `other` among this hex's neighbours, if it is one
    pub fn direction_to(&self, other: &HexCoord) -> Option<usize> {
        let delta = *other - *self;
        DIRECTIONS.iter().position(|d| *d == delta)
    }

    /// Whether `other` is one step away
    pub fn is_adjacent(&self, other: &HexCoord) -> bool {
        self.direction_to(other).is_some()
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }
}

impl Add for HexCoord {
    type Output = HexCoord;

    fn add(self, other: HexCoord) -> HexCoord {
        HexCoord::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for HexCoord {
    type Output = HexCoord;

    fn sub(self, other: HexCoord) -> HexCoord {
        HexCoord::new(self.q - other.q, self.r - other.r)
    }
}

impl Mul<i32> for HexCoord {
    type Output = HexCoord;

    fn mul(self, factor: i32) -> HexCoord {
        self.scale(factor)
    }
}
