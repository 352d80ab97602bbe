//! Connected sets of cells, used for piece footprints.

use crate::{
    error::{PuzzleError, Result},
    position::Position,
    transform::{Axis, Rotation},
};
use std::{
    collections::{BTreeSet, VecDeque},
    fmt,
};

/// An unordered set of cells.
///
/// The set iterates in reading order, so two sets with the same cells compare
/// and hash identically regardless of how they were built.
pub type Cells = BTreeSet<Position>;

/// A non-empty set of cells forming exactly one 4-connected component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    cells: Cells,
}

impl Shape {
    /// Create a new shape from the given cells.
    ///
    /// The cells are kept where they are; use [`Shape::normalize`] to move the
    /// shape to the origin. Duplicate cells are merged.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyShape`] if there are no cells and
    /// [`PuzzleError::Disconnected`] if the cells are not 4-connected.
    pub fn new(cells: impl IntoIterator<Item = Position>) -> Result<Self> {
        let shape = Self {
            cells: cells.into_iter().collect(),
        };
        shape.assert_connected()?;
        Ok(shape)
    }

    /// Check that this shape is a single 4-connected component.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyShape`] or [`PuzzleError::Disconnected`].
    pub fn assert_connected(&self) -> Result<()> {
        let Some(&start) = self.cells.first() else {
            return Err(PuzzleError::EmptyShape);
        };

        let reached = flood_fill(&self.cells, start);
        if reached.len() == self.cells.len() {
            Ok(())
        } else {
            Err(PuzzleError::Disconnected {
                size: self.cells.len(),
                unreachable: self.cells.difference(&reached).copied().collect(),
            })
        }
    }

    /// Return the translation-canonical form of this shape.
    ///
    /// The shape is shifted so that its smallest `x` and smallest `y` are both
    /// zero. Normalizing an already normalized shape is a no-op.
    pub fn normalize(&self) -> Shape {
        let corner = self.min_corner();
        // Offsets from the corner are smaller than the shape, so they fit.
        Shape {
            cells: self
                .cells
                .iter()
                .map(|&cell| {
                    Position::new(
                        cell.x.abs_diff(corner.x) as i32,
                        cell.y.abs_diff(corner.y) as i32,
                    )
                })
                .collect(),
        }
    }

    /// Return true if this shape is already in normalized form.
    pub fn is_normalized(&self) -> bool {
        self.min_corner() == Position::new(0, 0)
    }

    /// Return a copy of this shape moved by `offset`, or `None` if a cell
    /// would leave the `i32` range.
    pub fn translate(&self, offset: Position) -> Option<Shape> {
        let cells = self
            .cells
            .iter()
            .map(|&cell| cell.checked_add(offset))
            .collect::<Option<Cells>>()?;

        Some(Shape { cells })
    }

    /// Rotate the normalized shape around the origin.
    ///
    /// The shape is moved to the origin first, so the rotated cells always
    /// stay in range. The result is not normalized.
    pub fn rotate(&self, rotation: Rotation) -> Shape {
        Shape {
            cells: self
                .normalize()
                .cells
                .into_iter()
                .map(|cell| rotation.apply(cell))
                .collect(),
        }
    }

    /// Mirror the normalized shape across the given axis.
    ///
    /// The shape is moved to the origin first, so the mirrored cells always
    /// stay in range. The result is not normalized.
    pub fn mirror(&self, axis: Axis) -> Shape {
        Shape {
            cells: self
                .normalize()
                .cells
                .into_iter()
                .map(|cell| axis.apply(cell))
                .collect(),
        }
    }

    /// Return the first cell of the shape in reading order.
    ///
    /// This is the cell that gets aligned with an anchor during placement.
    pub fn reference_cell(&self) -> Position {
        // Shapes are never empty.
        self.cells.first().copied().unwrap_or_default()
    }

    /// Partition the shape's cells into 4-connected components.
    ///
    /// A valid shape always has exactly one component.
    pub fn connected_components(&self) -> Vec<Cells> {
        connected_components(&self.cells)
    }

    /// Return the number of cells in this shape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, shapes cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return true if the shape contains the given cell.
    pub fn contains(&self, position: &Position) -> bool {
        self.cells.contains(position)
    }

    /// Return an iterator over the cells in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> + '_ {
        self.cells.iter()
    }

    /// Return the underlying cell set.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    fn min_corner(&self) -> Position {
        let min_x = self.cells.iter().map(|cell| cell.x).min().unwrap_or(0);
        let min_y = self.cells.iter().map(|cell| cell.y).min().unwrap_or(0);
        Position::new(min_x, min_y)
    }
}

impl<'a> IntoIterator for &'a Shape {
    type IntoIter = std::collections::btree_set::Iter<'a, Position>;
    type Item = &'a Position;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(&self.cells, f)
    }
}

/// Return every cell reachable from `start` without leaving `cells`.
fn flood_fill(cells: &Cells, start: Position) -> Cells {
    let mut reached = Cells::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if !reached.insert(current) {
            continue;
        }
        queue.extend(
            current
                .neighbors()
                .filter(|neighbor| cells.contains(neighbor) && !reached.contains(neighbor)),
        );
    }

    reached
}

/// Split `cells` into maximal 4-connected groups.
///
/// Components are returned in reading order of their first cell.
pub(crate) fn connected_components(cells: &Cells) -> Vec<Cells> {
    let mut visited = Cells::new();
    let mut components = Vec::new();

    for &cell in cells {
        if visited.contains(&cell) {
            continue;
        }
        let component = flood_fill(cells, cell);
        visited.extend(component.iter().copied());
        components.push(component);
    }

    components
}

/// Draw the bounding box of `cells`, `#` for a present cell and `.` for a
/// missing one.
pub(crate) fn render(cells: &Cells, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
        return write!(f, "<empty>");
    };

    let min_x = cells.iter().map(|cell| cell.x).min().unwrap_or(0);
    let max_x = cells.iter().map(|cell| cell.x).max().unwrap_or(0);
    let rule = "-".repeat((max_x - min_x + 1) as usize);

    writeln!(f, "{rule}")?;
    for y in first.y..=last.y {
        let row: String = (min_x..=max_x)
            .map(|x| {
                if cells.contains(&Position::new(x, y)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        writeln!(f, "{row}")?;
    }
    write!(f, "{rule}")
}
