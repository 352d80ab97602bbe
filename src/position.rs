//! Cells of the square lattice.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Sub},
};

/// A single cell of the square lattice.
///
/// `(0, 0)` is the top-left corner, `x` grows to the right and `y` grows
/// downward. Positions are ordered in reading order: first by row (`y`), then
/// by column (`x`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// The column of the cell.
    pub x: i32,
    /// The row of the cell.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the orthogonal neighbors of this position.
    ///
    /// Diagonal cells are not neighbors. Neighbors that would fall outside the
    /// `i32` range are skipped, so cells on the edge of the lattice have fewer
    /// than four.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_add(Position::new(dx, dy)))
    }

    /// Add two positions, returning `None` if a coordinate overflows.
    pub fn checked_add(self, rhs: Position) -> Option<Position> {
        Some(Position::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
        ))
    }

    /// Subtract two positions, returning `None` if a coordinate overflows.
    pub fn checked_sub(self, rhs: Position) -> Option<Position> {
        Some(Position::new(
            self.x.checked_sub(rhs.x)?,
            self.y.checked_sub(rhs.y)?,
        ))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Panics on overflow in debug builds, like integer addition. Use
/// [`Position::checked_add`] near the edge of the lattice.
impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
