mod common;

use common::{assert_valid_solution, init_logging, pentominoes, solution_set};
use polypack::{Assignment, Board, Engine, SolveOptions};

#[test]
#[ignore = "test takes upwards of a minute when running not in release mode"]
fn pentominoes_three_by_twenty() {
    init_logging();

    // The 3x20 rectangle has two pentomino tilings, each seen in the four
    // symmetries of the rectangle.
    let engine = Engine::new(pentominoes(), Board::rectangle(20, 3), Assignment::new()).unwrap();

    let solutions = solution_set(
        engine
            .solve_with(&SolveOptions::new().workers(0))
            .unwrap(),
    );
    log::debug!("Found [{}] solutions.", solutions.len());

    assert_eq!(solutions.len(), 8);
    for solution in &solutions {
        assert_valid_solution(&engine, solution);
    }
}

#[test]
fn pentominoes_three_by_five() {
    init_logging();

    // UUUPP
    // UYUPP
    // YYYYP
    let names = ["P", "U", "Y"];
    let pieces: Vec<_> = pentominoes()
        .into_iter()
        .filter(|piece| names.contains(&piece.name()))
        .collect();
    let engine = Engine::new(pieces, Board::rectangle(5, 3), Assignment::new()).unwrap();

    let sequential = solution_set(engine.solve());
    assert!(!sequential.is_empty());
    for solution in &sequential {
        assert_valid_solution(&engine, solution);
    }

    let parallel = solution_set(
        engine
            .solve_with(&SolveOptions::new().workers(2))
            .unwrap(),
    );
    assert_eq!(parallel, sequential);
}
