//! Named puzzle pieces and their orientations.

use crate::{
    board::Board,
    error::Result,
    placement::Placements,
    position::Position,
    shape::Shape,
    transform::{Axis, Rotation},
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A puzzle piece: a name plus the shape of its footprint.
///
/// The shape is stored in normalized form. Two pieces are equal when both the
/// name and the shape match, so pieces that share a name but differ in shape
/// are different pieces.
///
/// All orientations of the piece are computed once on construction and are
/// shared between clones, so cloning a piece is cheap.
#[derive(Clone)]
pub struct Piece {
    name: Arc<str>,
    shape: Arc<Shape>,
    orientations: Arc<[Shape]>,
}

impl Piece {
    /// Create a new piece with the given name and shape.
    pub fn new(name: impl Into<Arc<str>>, shape: Shape) -> Self {
        let shape = shape.normalize();
        let orientations = Self::generate_orientations(&shape).into();

        Self {
            name: name.into(),
            shape: Arc::new(shape),
            orientations,
        }
    }

    /// Create a new piece from a list of cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the cells do not form a valid [`Shape`].
    pub fn from_cells(
        name: impl Into<Arc<str>>,
        cells: impl IntoIterator<Item = Position>,
    ) -> Result<Self> {
        Ok(Self::new(name, Shape::new(cells)?))
    }

    /// Get the piece name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the normalized piece shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Return the number of cells this piece covers.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Always false, pieces cover at least one cell.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Return a copy of this piece rotated by the given angle.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidRotation`](crate::PuzzleError) unless
    /// `degrees` is one of 0, 90, 180 or 270.
    pub fn rotate(&self, degrees: i32) -> Result<Piece> {
        Ok(self.rotated(Rotation::from_degrees(degrees)?))
    }

    /// Return a copy of this piece mirrored across the axis named `axis`
    /// (`'x'` or `'y'`).
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidAxis`](crate::PuzzleError) for any other
    /// axis name.
    pub fn mirror(&self, axis: char) -> Result<Piece> {
        Ok(self.mirrored(Axis::try_from(axis)?))
    }

    /// Return a copy of this piece rotated by `rotation`.
    pub fn rotated(&self, rotation: Rotation) -> Piece {
        Piece::new(Arc::clone(&self.name), self.shape.rotate(rotation))
    }

    /// Return a copy of this piece mirrored across `axis`.
    pub fn mirrored(&self, axis: Axis) -> Piece {
        Piece::new(Arc::clone(&self.name), self.shape.mirror(axis))
    }

    /// Return every distinct orientation of this piece.
    ///
    /// Orientations are normalized shapes, listed in a fixed order: for each
    /// rotation of 0, 90, 180 and 270 degrees, the rotated shape followed by
    /// its mirror images across the `x` and `y` axes. Repeated shapes are
    /// skipped, leaving between one and eight orientations depending on the
    /// symmetry of the piece.
    pub fn orientations(&self) -> &[Shape] {
        &self.orientations
    }

    /// Return a lazy iterator over every way to place this piece on `board`.
    pub fn placements(&self, board: &Board) -> Placements {
        self.placements_on(board.clone())
    }

    /// Like [`Piece::placements`], taking ownership of the board.
    pub(crate) fn placements_on(&self, board: Board) -> Placements {
        Placements::new(Arc::clone(&self.orientations), board)
    }

    /// Return true if this piece can be placed anywhere on `board`.
    ///
    /// Stops at the first placement found.
    pub fn fits(&self, board: &Board) -> bool {
        self.placements(board).next().is_some()
    }

    fn generate_orientations(shape: &Shape) -> Vec<Shape> {
        let mut orientations: Vec<Shape> = Vec::with_capacity(8);

        for rotation in Rotation::ALL {
            let rotated = shape.rotate(rotation);
            let candidates = std::iter::once(rotated.clone())
                .chain(Axis::ALL.into_iter().map(|axis| rotated.mirror(axis)));

            for candidate in candidates {
                let candidate = candidate.normalize();
                if !orientations.contains(&candidate) {
                    orientations.push(candidate);
                }
            }
        }

        orientations
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.shape == other.shape
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.shape.hash(state);
    }
}

impl PartialOrd for Piece {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Piece {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.name, &self.shape).cmp(&(&other.name, &other.shape))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Piece")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PuzzleError, shape::Cells};
    use std::collections::HashSet;

    fn piece(name: &str, cells: &[(i32, i32)]) -> Piece {
        Piece::from_cells(name, cells.iter().copied().map(Position::from)).unwrap()
    }

    fn cells(cells: &[(i32, i32)]) -> Cells {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn shape_is_normalized() {
        let p = piece("green", &[(2, 3), (3, 3), (3, 4)]);
        assert_eq!(p.shape().cells(), &cells(&[(0, 0), (1, 0), (1, 1)]));
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn equality_uses_name_and_shape() {
        let a = piece("green", &[(0, 0), (1, 0), (1, 1)]);
        let b = piece("green", &[(1, 1), (0, 0), (1, 0)]);
        let c = piece("red", &[(0, 0), (1, 0), (1, 1)]);
        let d = piece("green", &[(0, 0), (1, 0), (2, 0)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: HashSet<_> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn rotation_keeps_name() {
        let p = piece("green", &[(0, 0), (1, 0), (1, 1)]);

        let rotated = p.rotate(90).unwrap();
        assert_eq!(rotated.name(), "green");
        // (0,0),(0,1),(-1,1) shifted right by one
        assert_eq!(rotated.shape().cells(), &cells(&[(1, 0), (1, 1), (0, 1)]));

        assert_eq!(p.rotate(0).unwrap(), p);
        assert_eq!(
            p.rotate(180).unwrap().shape().cells(),
            &cells(&[(0, 0), (0, 1), (1, 1)])
        );
        assert_eq!(
            p.rotate(270).unwrap().shape().cells(),
            &cells(&[(0, 0), (1, 0), (0, 1)])
        );
    }

    #[test]
    fn invalid_transforms_are_errors() {
        let p = piece("green", &[(0, 0), (1, 0), (1, 1)]);

        assert!(matches!(
            p.rotate(45),
            Err(PuzzleError::InvalidRotation { degrees: 45 })
        ));
        assert!(matches!(
            p.mirror('z'),
            Err(PuzzleError::InvalidAxis { axis: 'z' })
        ));
    }

    #[test]
    fn mirror_axes() {
        let p = piece("blue", &[(0, 0), (1, 0), (2, 0), (0, 1)]);

        assert_eq!(
            p.mirror('x').unwrap().shape().cells(),
            &cells(&[(0, 0), (0, 1), (1, 1), (2, 1)])
        );
        assert_eq!(
            p.mirror('y').unwrap().shape().cells(),
            &cells(&[(0, 0), (1, 0), (2, 0), (2, 1)])
        );
    }

    #[test]
    fn orientation_counts_follow_symmetry() {
        let monomino = piece("a", &[(0, 0)]);
        let domino = piece("b", &[(0, 0), (1, 0)]);
        let square = piece("c", &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let l_tromino = piece("d", &[(0, 0), (1, 0), (1, 1)]);
        let t_tetromino = piece("e", &[(0, 0), (1, 0), (2, 0), (1, 1)]);
        let s_tetromino = piece("f", &[(1, 0), (2, 0), (0, 1), (1, 1)]);
        let l_tetromino = piece("g", &[(0, 0), (0, 1), (0, 2), (1, 2)]);
        let plus = piece("h", &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);

        assert_eq!(monomino.orientations().len(), 1);
        assert_eq!(domino.orientations().len(), 2);
        assert_eq!(square.orientations().len(), 1);
        assert_eq!(l_tromino.orientations().len(), 4);
        assert_eq!(t_tetromino.orientations().len(), 4);
        assert_eq!(s_tetromino.orientations().len(), 4);
        assert_eq!(l_tetromino.orientations().len(), 8);
        assert_eq!(plus.orientations().len(), 1);
    }

    #[test]
    fn orientations_are_normalized_and_distinct() {
        let p = piece("g", &[(0, 0), (0, 1), (0, 2), (1, 2)]);
        let orientations = p.orientations();

        assert!(orientations.iter().all(Shape::is_normalized));
        let distinct: HashSet<_> = orientations.iter().collect();
        assert_eq!(distinct.len(), orientations.len());
        assert_eq!(orientations[0], *p.shape());
    }

    #[test]
    fn orientations_are_closed() {
        let p = piece("pink", &[(2, 0), (2, 1), (1, 1), (0, 2), (1, 2)]);
        let expected: HashSet<_> = p.orientations().iter().cloned().collect();

        for orientation in p.orientations() {
            let again = Piece::new("pink", orientation.clone());
            let actual: HashSet<_> = again.orientations().iter().cloned().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn fits_on_board() {
        let p = piece("green", &[(0, 0), (1, 0), (1, 1)]);

        assert!(p.fits(&Board::rectangle(3, 3)));
        assert!(p.fits(&Board::new(cells(&[(0, 0), (1, 0), (1, 1), (2, 2)]))));
        assert!(!p.fits(&Board::new(cells(&[(0, 0), (2, 2)]))));
        assert!(!p.fits(&Board::default()));
    }

    #[test]
    fn fits_after_rotation_only() {
        let bar = piece("blue", &[(0, 0), (0, 1), (0, 2)]);
        assert!(bar.fits(&Board::rectangle(3, 1)));

        let long_bar = piece("red", &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(!long_bar.fits(&Board::rectangle(3, 3)));
    }

    #[test]
    fn pieces_at_the_lattice_edge() {
        let edge = piece(
            "edge",
            &[
                (i32::MAX, i32::MIN),
                (i32::MAX, i32::MIN + 1),
                (i32::MAX - 1, i32::MIN),
            ],
        );

        assert_eq!(edge.shape().cells(), &cells(&[(0, 0), (1, 0), (1, 1)]));
        assert_eq!(edge.orientations().len(), 4);
        assert_eq!(edge.rotate(90).unwrap().len(), 3);
    }
}
