#![no_main]

use libfuzzer_sys::fuzz_target;
use polypack::{Assignment, Board, Engine, Piece, Position, SolveOptions};
use std::collections::HashSet;

const SHAPES: &[&[(i32, i32)]] = &[
    &[(0, 0)],
    &[(0, 0), (1, 0)],
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
];

#[derive(Debug)]
struct PackingInput {
    board: Board,
    pieces: Vec<Piece>,
}

impl<'a> arbitrary::Arbitrary<'a> for PackingInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Up to 4x4 cells, one bit per cell in reading order.
        let mask = u.arbitrary::<u16>()?;
        let board = (0..16)
            .filter(|bit| mask & (1 << bit) != 0)
            .map(|bit| Position::new(bit % 4, bit / 4))
            .collect();

        let count = u.int_in_range(1..=3)?;
        let pieces = (0..count)
            .map(|index| {
                let cells = u.choose(SHAPES)?;
                Ok(Piece::from_cells(
                    format!("p{index}"),
                    cells.iter().copied().map(Position::from),
                )
                .expect("palette shapes are connected"))
            })
            .collect::<arbitrary::Result<_>>()?;

        Ok(PackingInput { board, pieces })
    }
}

fuzz_target!(|data: PackingInput| {
    let Ok(engine) = Engine::new(data.pieces, data.board, Assignment::new()) else {
        return;
    };

    let pruned: HashSet<_> = engine.solve().collect();
    for solution in &pruned {
        let total: usize = solution.iter().map(|placed| placed.cells.len()).sum();
        assert_eq!(solution.len(), engine.pieces().len());
        assert_eq!(total, solution.covered_cells().len());
        assert!(engine.board().contains_all(&solution.covered_cells()));
    }

    // Pruning only preserves every solution when the pieces fill the board.
    let area: usize = engine.pieces().iter().map(Piece::len).sum();
    if area == engine.board().len() {
        let exhaustive: HashSet<_> = engine
            .solve_with(&SolveOptions::new().pruning(false))
            .unwrap()
            .collect();
        assert_eq!(pruned, exhaustive);
        assert!(pruned
            .iter()
            .all(|solution| solution.is_exact_cover_of(engine.board())));
    }
});
