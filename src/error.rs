//! Error type shared by every fallible operation in the crate.

use crate::position::Position;
use std::{collections::BTreeSet, fmt};

/// Errors produced while building shapes, pieces and search engines.
#[derive(Debug)]
pub enum PuzzleError {
    /// A shape was built from an empty cell set.
    EmptyShape,

    /// A shape's cells do not form a single 4-connected component.
    Disconnected {
        /// Number of cells in the offending shape.
        size: usize,
        /// Cells not reachable from the shape's first cell.
        unreachable: BTreeSet<Position>,
    },

    /// The board cannot be filled by the remaining pieces.
    ///
    /// Some connected region of the board is smaller than the smallest piece
    /// still waiting to be placed.
    Unsolvable {
        /// Size of the smallest unplaced piece.
        smallest_piece: usize,
        /// Size of the smallest connected region of the board.
        smallest_region: usize,
    },

    /// A rotation angle other than 0, 90, 180 or 270 degrees was requested.
    InvalidRotation {
        /// The rejected angle, in degrees.
        degrees: i32,
    },

    /// A mirror axis other than `x` or `y` was requested.
    InvalidAxis {
        /// The rejected axis name.
        axis: char,
    },

    /// An engine was built without any pieces.
    NoPieces,

    /// The same piece appears more than once in the piece list.
    DuplicatePiece {
        /// Name of the repeated piece.
        name: String,
    },

    /// A partial assignment refers to a piece that is not in the piece list.
    UnknownPiece {
        /// Name of the unknown piece.
        name: String,
    },

    /// A partial assignment places a piece on cells that are already taken,
    /// either by another assigned piece or by the remaining board.
    OverlappingAssignment {
        /// Name of the piece whose cells overlap.
        name: String,
    },

    /// A partial assignment places a piece on cells that do not match any
    /// orientation of its shape.
    MismatchedAssignment {
        /// Name of the piece whose cells do not match.
        name: String,
    },

    /// A configuration value failed validation.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The worker pool for a parallel search could not be created.
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "Shape must contain at least one cell"),
            Self::Disconnected { size, unreachable } => {
                write!(
                    f,
                    "Shape of {size} cells is not connected, unreachable cells: {unreachable:?}"
                )
            }
            Self::Unsolvable {
                smallest_piece,
                smallest_region,
            } => {
                write!(
                    f,
                    "Board has a region of {smallest_region} cells but the smallest unplaced \
                     piece needs {smallest_piece}"
                )
            }
            Self::InvalidRotation { degrees } => {
                write!(f, "Rotation must be 0, 90, 180 or 270 degrees, got {degrees}")
            }
            Self::InvalidAxis { axis } => {
                write!(f, "Mirror axis must be 'x' or 'y', got '{axis}'")
            }
            Self::NoPieces => write!(f, "At least one piece is required"),
            Self::DuplicatePiece { name } => {
                write!(f, "Piece '{name}' appears more than once")
            }
            Self::UnknownPiece { name } => {
                write!(f, "Assigned piece '{name}' is not part of the puzzle")
            }
            Self::OverlappingAssignment { name } => {
                write!(f, "Cells assigned to piece '{name}' are already occupied")
            }
            Self::MismatchedAssignment { name } => {
                write!(f, "Cells assigned to piece '{name}' do not match its shape")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ThreadPool(source) => write!(f, "Failed to build worker pool: {source}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool(source) => Some(source),
            _ => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for PuzzleError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub(crate) fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
