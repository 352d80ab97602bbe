//! Backtracking search over piece placements.
//!
//! The search places pieces one at a time, in the order they were given, on
//! every position the [placement iterator](crate::Placements) offers. A branch
//! is complete once every piece is placed. When the pieces cover exactly as
//! many cells as the board has, a complete branch covers the whole board.
//!
//! Before descending into a new board the search checks that every connected
//! region of the board can hold at least the smallest remaining piece. A
//! region that is too small can never be filled, so the whole branch is
//! skipped.

use crate::{
    assignment::Assignment,
    board::Board,
    error::{PuzzleError, Result},
    options::{Parallelism, SolveOptions},
    piece::Piece,
    placement::Placements,
    shape::{Cells, Shape},
    solution::SolvedGame,
};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use std::{cmp::Reverse, collections::HashSet, sync::Arc};

/// A packing puzzle ready to be solved.
///
/// The engine holds the full list of pieces, the board that is still free,
/// and the pieces that have already been placed. Solving does not modify the
/// engine, so the same engine can be solved several times.
#[derive(Debug, Clone)]
pub struct Engine {
    pieces: Arc<[Piece]>,
    board: Board,
    assignment: Assignment,
    plan: Arc<Plan>,
}

/// The order in which unplaced pieces are tried.
#[derive(Debug)]
struct Plan {
    /// Indices into the piece list of the pieces still to place.
    order: Vec<usize>,
    /// `smallest[depth]` is the size of the smallest piece in `order[depth..]`.
    smallest: Vec<usize>,
}

impl Plan {
    fn new(pieces: &[Piece], assignment: &Assignment) -> Self {
        let order: Vec<usize> = pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| !assignment.contains(piece))
            .map(|(index, _)| index)
            .collect();

        let mut smallest = vec![0; order.len()];
        let mut running = usize::MAX;
        for (depth, &index) in order.iter().enumerate().rev() {
            running = running.min(pieces[index].len());
            smallest[depth] = running;
        }

        Self { order, smallest }
    }
}

/// Check that every region of `board` can hold a piece of `smallest_piece`
/// cells.
fn validity_guard(board: &Board, smallest_piece: usize) -> Result<()> {
    if board.has_min_connected_size(smallest_piece) {
        Ok(())
    } else {
        Err(PuzzleError::Unsolvable {
            smallest_piece,
            smallest_region: board.smallest_component().unwrap_or(0),
        })
    }
}

impl Engine {
    /// Create a new engine.
    ///
    /// `board` holds the cells that are still free. Pieces listed in
    /// `partial` are treated as already placed on the cells given there; those
    /// cells must not be part of `board`.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::NoPieces`] if `pieces` is empty.
    /// - [`PuzzleError::DuplicatePiece`] if a piece is listed twice.
    /// - [`PuzzleError::UnknownPiece`] if `partial` places a piece that is not
    ///   in `pieces`.
    /// - [`PuzzleError::OverlappingAssignment`] if cells in `partial` overlap
    ///   each other or the board.
    /// - [`PuzzleError::MismatchedAssignment`] if cells in `partial` are not
    ///   an orientation of the piece placed on them.
    /// - [`PuzzleError::Unsolvable`] if a region of the board is smaller than
    ///   the smallest unplaced piece.
    pub fn new(
        pieces: impl IntoIterator<Item = Piece>,
        board: Board,
        partial: Assignment,
    ) -> Result<Self> {
        let pieces: Arc<[Piece]> = pieces.into_iter().collect();
        if pieces.is_empty() {
            return Err(PuzzleError::NoPieces);
        }

        let mut seen = HashSet::with_capacity(pieces.len());
        for piece in pieces.iter() {
            if !seen.insert(piece) {
                return Err(PuzzleError::DuplicatePiece {
                    name: piece.name().to_string(),
                });
            }
        }

        let mut taken = Cells::new();
        for (piece, cells) in partial.iter() {
            if !seen.contains(piece) {
                return Err(PuzzleError::UnknownPiece {
                    name: piece.name().to_string(),
                });
            }
            if cells
                .iter()
                .any(|cell| board.contains(cell) || !taken.insert(*cell))
            {
                return Err(PuzzleError::OverlappingAssignment {
                    name: piece.name().to_string(),
                });
            }
            let matches = Shape::new(cells.iter().copied())
                .map_or(false, |footprint| {
                    piece.orientations().contains(&footprint.normalize())
                });
            if !matches {
                return Err(PuzzleError::MismatchedAssignment {
                    name: piece.name().to_string(),
                });
            }
        }

        let plan = Plan::new(&pieces, &partial);
        if let Some(&smallest_piece) = plan.smallest.first() {
            validity_guard(&board, smallest_piece)?;
        }

        log::debug!(
            "Created engine with [{}] pieces, [{}] unplaced, on a board of [{}] cells.",
            pieces.len(),
            plan.order.len(),
            board.len()
        );

        Ok(Self {
            pieces,
            board,
            assignment: partial,
            plan: Arc::new(plan),
        })
    }

    /// Reorder the pieces so that larger pieces are placed first.
    ///
    /// Pieces of the same size keep their relative order. Placing large pieces
    /// early usually shrinks the search tree considerably.
    pub fn sort_pieces(&mut self) {
        let mut pieces = self.pieces.to_vec();
        pieces.sort_by_key(|piece| Reverse(piece.len()));

        self.plan = Arc::new(Plan::new(&pieces, &self.assignment));
        self.pieces = pieces.into();
    }

    /// Return all pieces, in the order they are placed.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Return the free part of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the pieces placed before the search started.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Return true if `piece` was placed before the search started.
    pub fn is_placed(&self, piece: &Piece) -> bool {
        self.assignment.contains(piece)
    }

    /// Return true if every piece was placed before the search started.
    pub fn is_complete(&self) -> bool {
        self.pieces.iter().all(|piece| self.is_placed(piece))
    }

    /// Return a lazy iterator over all solutions, searching on the calling
    /// thread with pruning enabled.
    ///
    /// Solutions are not deduplicated.
    pub fn solve(&self) -> Search {
        self.search(true)
    }

    /// Return all solutions using the given options.
    ///
    /// With [`Parallelism::Sequential`] the returned iterator is lazy. With
    /// [`Parallelism::Workers`] every placement of the first unplaced piece is
    /// searched on a worker pool, and this call blocks until all of them are
    /// finished. The order of solutions is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ThreadPool`] if the worker pool cannot be
    /// created.
    pub fn solve_with(&self, options: &SolveOptions) -> Result<Solutions> {
        let inner = match options.parallelism {
            Parallelism::Sequential => SolutionsInner::Lazy(self.search(options.pruning)),
            Parallelism::Workers(workers) => {
                SolutionsInner::Collected(self.solve_parallel(workers, options.pruning)?)
            }
        };

        Ok(Solutions { inner })
    }

    fn search(&self, pruning: bool) -> Search {
        Search::start(self, pruning, self.board.clone(), self.assignment.clone(), 0)
    }

    fn solve_parallel(
        &self,
        workers: usize,
        pruning: bool,
    ) -> Result<std::vec::IntoIter<SolvedGame>> {
        // Nothing to split when every piece is already placed.
        let Some(&first) = self.plan.order.first() else {
            return Ok(self.search(pruning).collect::<Vec<_>>().into_iter());
        };

        let piece = &self.pieces[first];
        let branches: Vec<_> = piece.placements(&self.board).collect();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;

        log::debug!(
            "Splitting [{}] placements of piece [{}] across [{}] workers.",
            branches.len(),
            piece.name(),
            pool.current_num_threads()
        );

        let results: Vec<Vec<SolvedGame>> = pool.install(|| {
            branches
                .into_par_iter()
                .enumerate()
                .map(|(branch, placement)| {
                    let search = Search::start(
                        self,
                        pruning,
                        placement.remaining,
                        self.assignment.with(piece.clone(), placement.occupied),
                        1,
                    );

                    let solutions: Vec<_> = search.collect();
                    log::debug!(
                        "Branch [{}] produced [{}] solutions.",
                        branch,
                        solutions.len()
                    );
                    solutions
                })
                .collect()
        });

        Ok(results.into_iter().flatten().collect::<Vec<_>>().into_iter())
    }
}

/// Lazy, sequential iterator over the solutions of an [`Engine`].
///
/// The recursion is kept on an explicit stack of frames, one per placed
/// piece. Each frame owns the board it places its piece on and the
/// assignment that led to it, so frames never share mutable state.
#[derive(Debug)]
pub struct Search {
    pieces: Arc<[Piece]>,
    plan: Arc<Plan>,
    pruning: bool,
    stack: Vec<Frame>,
    // A solution found while entering a state, returned by the next call.
    pending: Option<SolvedGame>,
}

#[derive(Debug)]
struct Frame {
    depth: usize,
    assignment: Assignment,
    placements: Placements,
}

impl Search {
    fn start(
        engine: &Engine,
        pruning: bool,
        board: Board,
        assignment: Assignment,
        depth: usize,
    ) -> Self {
        let mut search = Self {
            pieces: Arc::clone(&engine.pieces),
            plan: Arc::clone(&engine.plan),
            pruning,
            stack: Vec::new(),
            pending: None,
        };
        search.pending = search.enter(board, assignment, depth);
        search
    }

    /// Visit the state `(board, assignment)` with `depth` pieces of the plan
    /// placed.
    ///
    /// Returns the solution if the state is complete, otherwise pushes a frame
    /// for the next piece unless the state is pruned.
    fn enter(&mut self, board: Board, assignment: Assignment, depth: usize) -> Option<SolvedGame> {
        if depth == self.plan.order.len() {
            log::trace!(
                "Found solution [{:?}] with [{}] cells left over.",
                assignment,
                board.len()
            );
            return Some(SolvedGame::new(assignment));
        }

        if self.pruning {
            if let Err(err) = validity_guard(&board, self.plan.smallest[depth]) {
                log::trace!("Pruned branch at depth [{}]: {}", depth, err);
                return None;
            }
        }

        let piece = &self.pieces[self.plan.order[depth]];
        self.stack.push(Frame {
            depth,
            assignment,
            placements: piece.placements_on(board),
        });

        None
    }

    /// Compute up to the next solution, returning `None` if there are no more.
    pub fn next_solution(&mut self) -> Option<SolvedGame> {
        if let Some(solution) = self.pending.take() {
            return Some(solution);
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some(placement) = frame.placements.next() else {
                self.stack.pop();
                continue;
            };

            let piece = self.pieces[self.plan.order[frame.depth]].clone();
            let assignment = frame.assignment.with(piece, placement.occupied);
            let depth = frame.depth + 1;

            if let Some(solution) = self.enter(placement.remaining, assignment, depth) {
                return Some(solution);
            }
        }

        None
    }

    /// Return all remaining solutions.
    pub fn all_solutions(&mut self) -> Vec<SolvedGame> {
        self.collect()
    }
}

impl Iterator for Search {
    type Item = SolvedGame;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}

/// Solutions returned by [`Engine::solve_with`].
#[derive(Debug)]
pub struct Solutions {
    inner: SolutionsInner,
}

#[derive(Debug)]
enum SolutionsInner {
    Lazy(Search),
    Collected(std::vec::IntoIter<SolvedGame>),
}

impl Iterator for Solutions {
    type Item = SolvedGame;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            SolutionsInner::Lazy(search) => search.next(),
            SolutionsInner::Collected(solutions) => solutions.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            SolutionsInner::Lazy(search) => search.size_hint(),
            SolutionsInner::Collected(solutions) => solutions.size_hint(),
        }
    }
}
