#![deny(missing_docs)]

//! Solver for [polyomino](https://en.wikipedia.org/wiki/Polyomino) packing
//! puzzles.
//!
//! Given a list of pieces, each free to rotate and reflect, and a board made of
//! unit cells, find every way to place all the pieces on the board without
//! overlap. When the pieces cover as many cells as the board has, every
//! solution covers each board cell exactly once. The pieces are placed one at
//! a time by a backtracking search that abandons any board with a region too
//! small for the smallest remaining piece.
//!
//! ```
//! use polypack::{Assignment, Board, Engine, Piece, Position};
//!
//! let l_tromino = |name: &str| {
//!     Piece::from_cells(name, [Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)])
//! };
//!
//! let engine = Engine::new(
//!     [l_tromino("green")?, l_tromino("blue")?],
//!     Board::rectangle(3, 2),
//!     Assignment::new(),
//! )?;
//!
//! for solution in engine.solve() {
//!     assert!(solution.is_exact_cover_of(engine.board()));
//! }
//! # Ok::<(), polypack::PuzzleError>(())
//! ```

pub mod assignment;
pub mod board;
pub mod engine;
pub mod error;
pub mod options;
pub mod piece;
pub mod placement;
pub mod position;
pub mod shape;
pub mod solution;
pub mod transform;

pub use assignment::Assignment;
pub use board::Board;
pub use engine::{Engine, Search, Solutions};
pub use error::{PuzzleError, Result};
pub use options::{Parallelism, SolveOptions};
pub use piece::Piece;
pub use placement::{Placement, Placements};
pub use position::Position;
pub use shape::{Cells, Shape};
pub use solution::{PlacedPiece, SolvedGame};
pub use transform::{Axis, Rotation};
