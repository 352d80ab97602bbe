//! The surface pieces are placed on.

use crate::{
    position::Position,
    shape::{self, Cells, Shape},
};
use std::fmt;

/// A finite set of free cells.
///
/// Unlike a [`Shape`], a board may be empty or split into several regions. The
/// search derives a fresh board for every placement by removing the cells the
/// placed piece covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Create a new board from the given cells.
    pub fn new(cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Create a `width` × `height` rectangular board with its top-left cell at
    /// the origin.
    pub fn rectangle(width: i32, height: i32) -> Self {
        Self::new((0..height).flat_map(|y| (0..width).map(move |x| Position::new(x, y))))
    }

    /// Return a copy of this board with the given cells removed.
    pub fn without(&self, cells: &Cells) -> Board {
        Board {
            cells: self.cells.difference(cells).copied().collect(),
        }
    }

    /// Return the neighbors of `position` that are part of this board.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        position
            .neighbors()
            .filter(|neighbor| self.cells.contains(neighbor))
    }

    /// Partition the board into maximal 4-connected regions.
    pub fn connected_components(&self) -> Vec<Cells> {
        shape::connected_components(&self.cells)
    }

    /// Return the size of the smallest connected region, or `None` for an
    /// empty board.
    pub fn smallest_component(&self) -> Option<usize> {
        self.connected_components().iter().map(Cells::len).min()
    }

    /// Return true if every connected region has at least `min_size` cells.
    ///
    /// A region smaller than the smallest remaining piece can never be filled,
    /// so a `false` here proves the board unsolvable. A `true` proves nothing.
    pub fn has_min_connected_size(&self, min_size: usize) -> bool {
        self.smallest_component()
            .map_or(true, |smallest| smallest >= min_size)
    }

    /// Return true if every cell of `cells` is free on this board.
    pub fn contains_all(&self, cells: &Cells) -> bool {
        cells.is_subset(&self.cells)
    }

    /// Return true if the cell is free on this board.
    pub fn contains(&self, position: &Position) -> bool {
        self.cells.contains(position)
    }

    /// Return the number of free cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return true if there are no free cells left.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return an iterator over the free cells in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> + '_ {
        self.cells.iter()
    }

    /// Return the underlying cell set.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }
}

impl FromIterator<Position> for Board {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Board::new(iter)
    }
}

impl From<Cells> for Board {
    fn from(cells: Cells) -> Self {
        Board { cells }
    }
}

impl From<&Shape> for Board {
    fn from(shape: &Shape) -> Self {
        Board {
            cells: shape.cells().clone(),
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type IntoIter = std::collections::btree_set::Iter<'a, Position>;
    type Item = &'a Position;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        shape::render(&self.cells, f)
    }
}
