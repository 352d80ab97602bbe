//! Complete solutions produced by the search.

use crate::{assignment::Assignment, board::Board, piece::Piece, shape::Cells};

/// One piece of a solution together with the cells it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacedPiece {
    /// The placed piece.
    pub piece: Piece,
    /// The board cells covered by the piece.
    pub cells: Cells,
}

/// A complete, valid assignment of every piece to the board.
///
/// Placed pieces are kept sorted by piece, so two solutions compare equal
/// exactly when they contain the same `(piece, cells)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolvedGame {
    placed: Vec<PlacedPiece>,
}

impl SolvedGame {
    pub(crate) fn new(assignment: Assignment) -> Self {
        let mut placed: Vec<_> = assignment
            .into_iter()
            .map(|(piece, cells)| PlacedPiece { piece, cells })
            .collect();
        placed.sort();
        debug_assert!(!placed.is_empty(), "Solutions always place a piece.");

        Self { placed }
    }

    /// Return an iterator over the placed pieces.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedPiece> + '_ {
        self.placed.iter()
    }

    /// Return the number of placed pieces.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Always false, a solution places at least one piece.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Return the cells covered by `piece`, if it is part of this solution.
    pub fn cells_of(&self, piece: &Piece) -> Option<&Cells> {
        self.placed
            .iter()
            .find(|placed| placed.piece == *piece)
            .map(|placed| &placed.cells)
    }

    /// Return the union of all covered cells.
    pub fn covered_cells(&self) -> Cells {
        self.placed
            .iter()
            .flat_map(|placed| placed.cells.iter().copied())
            .collect()
    }

    /// Return true if the placed pieces cover every cell of `board` exactly
    /// once and nothing else.
    pub fn is_exact_cover_of(&self, board: &Board) -> bool {
        let total: usize = self.placed.iter().map(|placed| placed.cells.len()).sum();
        let covered = self.covered_cells();

        total == covered.len() && covered == *board.cells()
    }
}

impl<'a> IntoIterator for &'a SolvedGame {
    type IntoIter = std::slice::Iter<'a, PlacedPiece>;
    type Item = &'a PlacedPiece;

    fn into_iter(self) -> Self::IntoIter {
        self.placed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn domino(name: &str) -> Piece {
        Piece::from_cells(name, [Position::new(0, 0), Position::new(1, 0)]).unwrap()
    }

    fn cells(cells: &[(i32, i32)]) -> Cells {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Assignment = [
            (domino("red"), cells(&[(0, 0), (1, 0)])),
            (domino("blue"), cells(&[(0, 1), (1, 1)])),
        ]
        .into_iter()
        .collect();
        let b: Assignment = [
            (domino("blue"), cells(&[(0, 1), (1, 1)])),
            (domino("red"), cells(&[(0, 0), (1, 0)])),
        ]
        .into_iter()
        .collect();

        assert_eq!(SolvedGame::new(a), SolvedGame::new(b));
    }

    #[test]
    fn exact_cover_check() {
        let board = Board::rectangle(2, 2);
        let solved = SolvedGame::new(
            [
                (domino("red"), cells(&[(0, 0), (1, 0)])),
                (domino("blue"), cells(&[(0, 1), (1, 1)])),
            ]
            .into_iter()
            .collect(),
        );

        assert_eq!(solved.len(), 2);
        assert!(solved.is_exact_cover_of(&board));
        assert!(!solved.is_exact_cover_of(&Board::rectangle(3, 2)));
        assert_eq!(solved.cells_of(&domino("red")), Some(&cells(&[(0, 0), (1, 0)])));
        assert_eq!(solved.cells_of(&domino("green")), None);
    }

    #[test]
    fn overlapping_pieces_are_not_an_exact_cover() {
        let solved = SolvedGame::new(
            [
                (domino("red"), cells(&[(0, 0), (1, 0)])),
                (domino("blue"), cells(&[(1, 0), (2, 0)])),
            ]
            .into_iter()
            .collect(),
        );

        assert!(!solved.is_exact_cover_of(&Board::rectangle(3, 1)));
    }
}
