//! Enumeration of anchored placements of a piece on a board.

use crate::{
    board::Board,
    position::Position,
    shape::{Cells, Shape},
};
use std::sync::Arc;

/// The result of putting one piece on a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The board left over after removing the covered cells.
    pub remaining: Board,
    /// The cells covered by the piece.
    pub occupied: Cells,
}

/// Lazy iterator over every placement of a piece on a board.
///
/// Orientations are tried in the order given by
/// [`Piece::orientations`](crate::Piece::orientations). For each orientation,
/// every board cell is tried as an anchor in reading order: the orientation is
/// shifted so that its [reference cell](Shape::reference_cell) lands on the
/// anchor, and a placement is produced if all shifted cells are on the board.
///
/// Since orientations are distinct and every anchor yields a different shift,
/// no occupied cell set is produced twice.
#[derive(Debug, Clone)]
pub struct Placements {
    orientations: Arc<[Shape]>,
    board: Board,
    anchors: Vec<Position>,
    orientation: usize,
    anchor: usize,
}

impl Placements {
    pub(crate) fn new(orientations: Arc<[Shape]>, board: Board) -> Self {
        let anchors = board.iter().copied().collect();

        Self {
            orientations,
            board,
            anchors,
            orientation: 0,
            anchor: 0,
        }
    }

    /// Return the board placements are taken from.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(shape) = self.orientations.get(self.orientation) {
            let reference = shape.reference_cell();

            while let Some(&anchor) = self.anchors.get(self.anchor) {
                self.anchor += 1;

                // Shifts that leave the `i32` range cannot land on the board.
                let Some(offset) = anchor.checked_sub(reference) else {
                    continue;
                };
                let fits = shape.iter().all(|&cell| {
                    cell.checked_add(offset)
                        .map_or(false, |cell| self.board.contains(&cell))
                });
                if !fits {
                    continue;
                }

                let occupied: Cells = shape.iter().map(|&cell| cell + offset).collect();
                return Some(Placement {
                    remaining: self.board.without(&occupied),
                    occupied,
                });
            }

            self.orientation += 1;
            self.anchor = 0;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let orientations_left = self.orientations.len().saturating_sub(self.orientation);
        let upper = (orientations_left * self.anchors.len()).saturating_sub(self.anchor);

        (0, Some(upper))
    }
}
