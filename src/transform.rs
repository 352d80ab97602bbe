//! Rotations and reflections of the square lattice around the origin.

use crate::{
    error::{PuzzleError, Result},
    position::Position,
};

/// A quarter-turn rotation around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    R0,
    /// Rotate by 90 degrees: `(x, y)` becomes `(-y, x)`.
    R90,
    /// Rotate by 180 degrees: `(x, y)` becomes `(-x, -y)`.
    R180,
    /// Rotate by 270 degrees: `(x, y)` becomes `(y, -x)`.
    R270,
}

impl Rotation {
    /// All rotations, in the order used for orientation enumeration.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Return the rotation for the given angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidRotation`] for any angle other than 0, 90,
    /// 180 or 270.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            _ => Err(PuzzleError::InvalidRotation { degrees }),
        }
    }

    /// Return the angle of this rotation in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Rotate a single position.
    ///
    /// # Panics
    ///  - In debug builds, if a coordinate to be negated is `i32::MIN`.
    pub fn apply(self, Position { x, y }: Position) -> Position {
        match self {
            Rotation::R0 => Position::new(x, y),
            Rotation::R90 => Position::new(-y, x),
            Rotation::R180 => Position::new(-x, -y),
            Rotation::R270 => Position::new(y, -x),
        }
    }
}

/// An axis to mirror shapes across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Mirror across the horizontal axis: `(x, y)` becomes `(x, -y)`.
    X,
    /// Mirror across the vertical axis: `(x, y)` becomes `(-x, y)`.
    Y,
}

impl Axis {
    /// Both axes, in the order used for orientation enumeration.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Mirror a single position.
    ///
    /// # Panics
    ///  - In debug builds, if the mirrored coordinate is `i32::MIN`.
    pub fn apply(self, Position { x, y }: Position) -> Position {
        match self {
            Axis::X => Position::new(x, -y),
            Axis::Y => Position::new(-x, y),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = PuzzleError;

    fn try_from(axis: char) -> Result<Self> {
        match axis.to_ascii_lowercase() {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            _ => Err(PuzzleError::InvalidAxis { axis }),
        }
    }
}
