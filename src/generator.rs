//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation of puzzles is done by first producing a full grid with a
//! [Generator] and then removing some clues using a [Reducer].

use crate::{CELL_COUNT, Grid};
use crate::cell::DigitSet;
use crate::error::{GridError, GridResult};
use crate::reduce::propagate;
use crate::solver::{PropagationSolver, Solver};
use crate::verify::{classify, Verdict};

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly produces a full [Grid], that is, a grid in which
/// every cell is solved. It uses a random number generator to decide the
/// digits. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len == 0 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &Grid, i: usize) -> Option<Grid> {
        if i == CELL_COUNT {
            return Some(grid.clone());
        }

        let cell = grid.cells()[i];

        if cell.is_solved() {
            return self.fill_rec(grid, i + 1);
        }

        for digit in shuffle(&mut self.rng, cell.iter()) {
            let mut branch = grid.clone();
            branch.cells_mut()[i] = DigitSet::of(digit).unwrap();
            propagate(&mut branch);

            if classify(&branch) != Verdict::Invalid {
                if let Some(full) = self.fill_rec(&branch, i + 1) {
                    return Some(full);
                }
            }
        }

        None
    }

    /// Completes the given grid with random digits that are consistent with
    /// all cells already solved in it. The input is not modified; the
    /// completed grid is returned.
    ///
    /// If no error is returned, the result classifies as
    /// [Verdict::Complete].
    ///
    /// # Errors
    ///
    /// * `GridError::Unsatisfiable` If the given grid admits no complete
    /// solution.
    pub fn fill(&mut self, grid: &Grid) -> GridResult<Grid> {
        let mut start = grid.clone();
        propagate(&mut start);

        if classify(&start) == Verdict::Invalid {
            return Err(GridError::Unsatisfiable);
        }

        self.fill_rec(&start, 0).ok_or(GridError::Unsatisfiable)
    }

    /// Generates a new random full [Grid]. The result classifies as
    /// [Verdict::Complete].
    ///
    /// # Errors
    ///
    /// Technically `GridError::Unsatisfiable`, but an unconstrained grid
    /// always admits solutions, so this is not expected to occur.
    pub fn generate(&mut self) -> GridResult<Grid> {
        self.fill(&Grid::new())
    }
}

/// A reducer can be applied to the output of a [Generator] to remove clues
/// from the grid as long as the provided [Solver] still completes the
/// puzzle. The solver controls the difficulty: a puzzle reduced against the
/// [PropagationSolver] remains solvable by propagation alone.
///
/// Reducing against a solver that completes every satisfiable puzzle strips
/// every clue, since any satisfiable remainder still completes, so partial
/// solvers are the useful choice here.
///
/// [Reducer::new_default] yields a reducer with a [PropagationSolver] and a
/// [ThreadRng].
pub struct Reducer<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Reducer<PropagationSolver, ThreadRng> {

    /// Creates a new reducer with a [PropagationSolver] to check continued
    /// solvability and a [ThreadRng] to decide which clues are removed.
    pub fn new_default() -> Reducer<PropagationSolver, ThreadRng> {
        Reducer::new(PropagationSolver, rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Reducer<S, R> {

    /// Creates a new reducer with the given solver and random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `solver`: A [Solver] used to check whether a reduced puzzle can
    /// still be completed. This controls the difficulty.
    /// * `rng`: A random number generator that decides which clues are
    /// removed.
    pub fn new(solver: S, rng: R) -> Reducer<S, R> {
        Reducer {
            solver,
            rng
        }
    }

    /// Removes as many clues from the given grid as possible. Every solved
    /// cell is visited in random order, cleared back to the full candidate
    /// set, and restored if the wrapped solver can no longer complete the
    /// puzzle afterwards. All changes are applied to the given grid.
    ///
    /// The input is expected to be a clue grid, i.e. every cell is either
    /// solved or holds all nine candidates, as produced by a [Generator].
    pub fn reduce(&mut self, grid: &mut Grid) {
        for i in shuffle(&mut self.rng, 0..CELL_COUNT) {
            let cell = grid.cells()[i];

            if !cell.is_solved() {
                continue;
            }

            grid.cells_mut()[i] = DigitSet::all();

            if self.solver.solve(grid).verdict != Verdict::Complete {
                grid.cells_mut()[i] = cell;
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn generated_grid_is_complete() {
        let mut generator = Generator::new_default();
        let grid = generator.generate().unwrap();

        assert_eq!(Verdict::Complete, classify(&grid));
    }

    #[test]
    fn fill_preserves_given_clues() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, DigitSet::of(5).unwrap()).unwrap();
        grid.set_cell(4, 4, DigitSet::of(1).unwrap()).unwrap();

        let mut generator = Generator::new_default();
        let full = generator.fill(&grid).unwrap();

        assert_eq!(Verdict::Complete, classify(&full));
        assert_eq!(Some(5), full.cell(0, 0).unwrap().only_digit());
        assert_eq!(Some(1), full.cell(4, 4).unwrap().only_digit());
    }

    #[test]
    fn fill_rejects_contradictory_clues() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, DigitSet::of(5).unwrap()).unwrap();
        grid.set_cell(8, 0, DigitSet::of(5).unwrap()).unwrap();

        let mut generator = Generator::new_default();

        assert_eq!(Err(GridError::Unsatisfiable), generator.fill(&grid));
    }

    #[test]
    fn reduced_grid_stays_solvable() {
        let mut generator = Generator::new_default();
        let mut puzzle = generator.generate().unwrap();
        let mut reducer = Reducer::new_default();

        reducer.reduce(&mut puzzle);

        // At least one clue is always removable from a full grid.
        assert!(puzzle.count_solved() < CELL_COUNT);
        assert_eq!(Verdict::Complete,
            PropagationSolver.solve(&puzzle).verdict);
    }
}
