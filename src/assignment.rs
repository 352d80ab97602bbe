//! Pieces that have already been put on the board.

use crate::{piece::Piece, shape::Cells};

/// A mapping from placed pieces to the cells they cover.
///
/// Each piece appears at most once. The search never mutates an assignment
/// shared with another frame: it derives a new one with [`Assignment::with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<(Piece, Cells)>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `piece` on `cells`, returning the cells it was placed on before if
    /// it was already assigned.
    pub fn insert(&mut self, piece: Piece, cells: Cells) -> Option<Cells> {
        match self.entries.iter_mut().find(|(placed, _)| *placed == piece) {
            Some((_, existing)) => Some(std::mem::replace(existing, cells)),
            None => {
                self.entries.push((piece, cells));
                None
            }
        }
    }

    /// Return a copy of this assignment with `piece` placed on `cells`.
    pub fn with(&self, piece: Piece, cells: Cells) -> Assignment {
        let mut extended = self.clone();
        extended.insert(piece, cells);
        extended
    }

    /// Return the cells `piece` is placed on.
    pub fn get(&self, piece: &Piece) -> Option<&Cells> {
        self.entries
            .iter()
            .find(|(placed, _)| placed == piece)
            .map(|(_, cells)| cells)
    }

    /// Return true if `piece` has been placed.
    pub fn contains(&self, piece: &Piece) -> bool {
        self.get(piece).is_some()
    }

    /// Return the number of placed pieces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if no piece has been placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return an iterator over placed pieces and their cells, in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&Piece, &Cells)> + '_ {
        self.entries.iter().map(|(piece, cells)| (piece, cells))
    }

    /// Return the union of all covered cells.
    pub fn covered_cells(&self) -> Cells {
        self.entries
            .iter()
            .flat_map(|(_, cells)| cells.iter().copied())
            .collect()
    }
}

impl FromIterator<(Piece, Cells)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Piece, Cells)>>(iter: T) -> Self {
        let mut assignment = Assignment::new();
        for (piece, cells) in iter {
            assignment.insert(piece, cells);
        }
        assignment
    }
}

impl IntoIterator for Assignment {
    type IntoIter = std::vec::IntoIter<(Piece, Cells)>;
    type Item = (Piece, Cells);

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
