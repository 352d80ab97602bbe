use polypack::{Board, Engine, Piece, Position, SolvedGame};
use std::collections::{BTreeSet, HashSet};

/// Install a test logger, ignoring the error if another test already did.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a piece from a list of `(x, y)` cells.
///
/// # Panics
///  - If the cells do not form a connected shape.
#[allow(dead_code)]
pub fn piece(name: &str, cells: &[(i32, i32)]) -> Piece {
    Piece::from_cells(name, cells.iter().copied().map(Position::from))
        .unwrap_or_else(|err| panic!("Piece [{name}] is invalid: {err}"))
}

/// Build a board from a list of `(x, y)` cells.
#[allow(dead_code)]
pub fn board(cells: &[(i32, i32)]) -> Board {
    cells.iter().copied().map(Position::from).collect()
}

/// The two free trominoes.
#[allow(dead_code)]
pub fn trominoes() -> Vec<Piece> {
    vec![
        piece("I3", &[(0, 0), (1, 0), (2, 0)]),
        piece("L3", &[(0, 0), (1, 0), (1, 1)]),
    ]
}

/// The five free tetrominoes.
#[allow(dead_code)]
pub fn tetrominoes() -> Vec<Piece> {
    vec![
        piece("I4", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
        piece("O4", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        piece("T4", &[(0, 0), (1, 0), (2, 0), (1, 1)]),
        piece("S4", &[(1, 0), (2, 0), (0, 1), (1, 1)]),
        piece("L4", &[(0, 0), (0, 1), (0, 2), (1, 2)]),
    ]
}

/// The twelve free pentominoes.
#[allow(dead_code)]
pub fn pentominoes() -> Vec<Piece> {
    vec![
        piece("F", &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]),
        piece("I", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
        piece("L", &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)]),
        piece("N", &[(1, 0), (1, 1), (0, 2), (1, 2), (0, 3)]),
        piece("P", &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
        piece("T", &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
        piece("U", &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)]),
        piece("V", &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
        piece("W", &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]),
        piece("X", &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
        piece("Y", &[(1, 0), (0, 1), (1, 1), (1, 2), (1, 3)]),
        piece("Z", &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]),
    ]
}

/// Give every piece a distinct name so that repeated shapes are distinct
/// pieces.
#[allow(dead_code)]
pub fn numbered(pieces: impl IntoIterator<Item = Piece>) -> Vec<Piece> {
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| Piece::new(format!("{}#{index}", piece.name()), piece.shape().clone()))
        .collect()
}

/// Assert every property a solution of `engine` must have.
///
/// # Panics
///  - If a piece is missing or repeated.
///  - If two pieces overlap.
///  - If a piece covers a cell outside the board.
///  - If the piece area equals the board size but the board is not covered
///    exactly.
#[allow(dead_code)]
pub fn assert_valid_solution(engine: &Engine, solution: &SolvedGame) {
    let placed: Vec<_> = solution.iter().map(|placed| &placed.piece).collect();
    let expected: BTreeSet<_> = engine.pieces().iter().collect();
    let actual: BTreeSet<_> = placed.iter().copied().collect();
    assert_eq!(placed.len(), engine.pieces().len(), "Piece count mismatch");
    assert_eq!(actual, expected, "Every piece must be placed exactly once");

    let mut covered = BTreeSet::new();
    for placed in solution {
        assert_eq!(placed.cells.len(), placed.piece.len());
        for cell in &placed.cells {
            assert!(
                covered.insert(*cell),
                "Cell [{cell}] is covered twice in {solution:?}"
            );
        }
        let footprint = polypack::Shape::new(placed.cells.iter().copied())
            .expect("placed cells are connected")
            .normalize();
        assert!(
            placed.piece.orientations().contains(&footprint),
            "Piece [{}] is placed in a shape it cannot take",
            placed.piece.name()
        );
    }

    let full_board: BTreeSet<_> = engine
        .board()
        .iter()
        .copied()
        .chain(engine.assignment().covered_cells())
        .collect();
    assert!(
        covered.is_subset(&full_board),
        "Pieces cover cells outside the board"
    );

    let area: usize = engine.pieces().iter().map(Piece::len).sum();
    if area == full_board.len() {
        assert_eq!(covered, full_board, "Board is not covered exactly");
    }
}

/// Collect solutions into a set, asserting that none is produced twice.
#[allow(dead_code)]
pub fn solution_set(solutions: impl IntoIterator<Item = SolvedGame>) -> HashSet<SolvedGame> {
    let mut set = HashSet::new();
    for solution in solutions {
        assert!(set.insert(solution), "Solution produced twice");
    }
    set
}
