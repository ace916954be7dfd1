//! This module contains the logic for solving grids.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and its two implementations: the
//! partial [PropagationSolver](struct.PropagationSolver.html), which only
//! eliminates candidates until no rule applies anymore, and the
//! [HypothesisSolver](struct.HypothesisSolver.html), which additionally
//! branches over speculative digit placements and thereby completes every
//! satisfiable puzzle.

use crate::{CELL_COUNT, Grid, SIZE};
use crate::cell::DigitSet;
use crate::reduce::propagate;
use crate::verify::{classify, Verdict};

/// Everything a solver has to report about a puzzle: the resulting grid,
/// the total number of cell changes applied on the way there, and the
/// [Verdict] of the resulting grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {

    /// The grid the solver ended on. If the verdict is
    /// [Verdict::Complete], every cell holds a single digit; otherwise
    /// unsolved cells hold their remaining candidates, which display as the
    /// ascending concatenation of their digits.
    pub grid: Grid,

    /// The total number of cell changes applied by propagation. For the
    /// [HypothesisSolver], changes made on abandoned branches are not
    /// counted, only those of the levels that led to the result.
    pub change_count: usize,

    /// The classification of the returned grid.
    pub verdict: Verdict
}

/// A trait for structs which have the ability to solve Sudoku grids. Not
/// all implementers complete every satisfiable puzzle; a partial solver may
/// stop at the point where its reasoning is exhausted, similar to a human
/// solver.
pub trait Solver {

    /// Solves, or attempts to solve, the given grid. The input is not
    /// modified; the resulting grid is part of the returned [Resolution].
    fn solve(&self, grid: &Grid) -> Resolution;
}

/// Counts, over all unsolved cells, how many cells still hold each digit as
/// a candidate and returns the digits 1 to 9 ordered from least frequent to
/// most frequent. Ties are resolved towards the smaller digit.
///
/// The hypothesis search branches over the rarest digit first: it has the
/// fewest possible placements, so the branching factor is minimal and
/// infeasible branches fail fast.
pub fn rank_digits(grid: &Grid) -> Vec<usize> {
    let mut frequencies = [0usize; SIZE];

    for cell in grid.cells().iter() {
        if !cell.is_solved() {
            for digit in cell.iter() {
                frequencies[digit - 1] += 1;
            }
        }
    }

    let mut digits: Vec<usize> = (1..=SIZE).collect();
    digits.sort_by_key(|&digit| frequencies[digit - 1]);
    digits
}

/// A partial [Solver](trait.Solver.html) which runs candidate elimination
/// to its fixed point and stops there. The resulting verdict is
/// [Verdict::Complete] only for puzzles which can be solved by propagation
/// alone; harder puzzles come back [Verdict::Incomplete] with their cells
/// partially reduced.
pub struct PropagationSolver;

impl Solver for PropagationSolver {
    fn solve(&self, grid: &Grid) -> Resolution {
        let mut grid = grid.clone();
        let change_count = propagate(&mut grid);
        let verdict = classify(&grid);

        Resolution {
            grid,
            change_count,
            verdict
        }
    }
}

/// The shared state of one hypothesis search. Once a branch finds a
/// complete grid it is stored here, and every loop in the search checks the
/// slot before spawning further branches, so the remaining search winds
/// down without starting new work.
struct Search {
    result: Option<Grid>
}

/// A complete [Solver](trait.Solver.html) which combines candidate
/// elimination with a backtracking search. Whenever propagation reaches a
/// fixed point on an incomplete grid, the solver speculatively collapses an
/// unsolved cell to one of its candidates on a copy of the grid and
/// recurses. Branches whose propagation produces a contradiction are
/// abandoned; the first complete grid found is the result.
///
/// Branches are ordered by [rank_digits] and, per digit, by cell index, so
/// the search is deterministic. The result is the first solution in that
/// order, which for puzzles with several solutions is not necessarily the
/// lexicographically smallest one.
///
/// If the returned verdict is not [Verdict::Complete], the puzzle has no
/// solution: either the contradiction was already visible at the top-level
/// fixed point (verdict [Verdict::Invalid]) or every hypothesis branch ran
/// into one (verdict [Verdict::Incomplete], with the grid reduced as far as
/// propagation got).
pub struct HypothesisSolver;

impl HypothesisSolver {
    fn solve_rec(grid: &mut Grid, search: &mut Search) -> usize {
        let mut change_count = propagate(grid);

        match classify(grid) {
            Verdict::Complete => {
                search.result = Some(grid.clone());
                change_count
            },
            Verdict::Invalid => change_count,
            Verdict::Incomplete => {
                // Every level collapses a previously unsolved cell, so the
                // recursion is at most 81 levels deep.
                for digit in rank_digits(grid) {
                    for i in 0..CELL_COUNT {
                        if search.result.is_some() {
                            return change_count;
                        }

                        let cell = grid.cells()[i];

                        if cell.is_solved() || !cell.contains(digit) {
                            continue;
                        }

                        let mut branch = grid.clone();
                        branch.cells_mut()[i] = DigitSet::of(digit).unwrap();
                        let branch_changes =
                            HypothesisSolver::solve_rec(&mut branch, search);

                        if search.result.is_some() {
                            change_count += branch_changes;
                        }
                    }
                }

                change_count
            }
        }
    }
}

impl Solver for HypothesisSolver {
    fn solve(&self, grid: &Grid) -> Resolution {
        let mut work = grid.clone();
        let mut search = Search { result: None };
        let change_count = HypothesisSolver::solve_rec(&mut work, &mut search);

        match search.result {
            Some(solved) => Resolution {
                grid: solved,
                change_count,
                verdict: Verdict::Complete
            },
            None => {
                let verdict = classify(&work);

                Resolution {
                    grid: work,
                    change_count,
                    verdict
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn digits_rank_ascending_on_equal_frequencies() {
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], rank_digits(&Grid::new()));
    }

    #[test]
    fn rare_digit_ranks_first() {
        let mut grid = Grid::new();

        for column in 0..SIZE {
            let mut cell = DigitSet::all();
            cell.remove(7).unwrap();
            grid.set_cell(column, 0, cell).unwrap();
            grid.set_cell(column, 1, cell).unwrap();
        }

        assert_eq!(7, rank_digits(&grid)[0]);
    }

    #[test]
    fn solved_cells_do_not_contribute_to_frequencies() {
        let mut grid = Grid::new();

        // 81 solved 9s would dominate the count if they were included.
        for column in 0..SIZE {
            for row in 0..SIZE {
                grid.set_cell(column, row, DigitSet::of(9).unwrap()).unwrap();
            }
        }

        grid.set_cell(0, 0, DigitSet::from_clue(12)).unwrap();

        // The 9 counts zero occurrences like the other absent digits; only
        // the seeded 1 and 2 rank last.
        assert_eq!(vec![3, 4, 5, 6, 7, 8, 9, 1, 2], rank_digits(&grid));
    }

    #[test]
    fn propagation_solver_completes_single_gap() {
        let puzzle = Grid::parse("
            1 2 3 4 5 6 7 8 9
            4 5 6 7 8 9 1 2 3
            7 8 9 1 2 3 4 5 6
            2 3 4 5 6 7 8 9 1
            5 6 7 8 0 1 2 3 4
            8 9 1 2 3 4 5 6 7
            3 4 5 6 7 8 9 1 2
            6 7 8 9 1 2 3 4 5
            9 1 2 3 4 5 6 7 8").unwrap();
        let resolution = PropagationSolver.solve(&puzzle);

        assert_eq!(Verdict::Complete, resolution.verdict);
        assert!(resolution.change_count >= 1);
        assert_eq!(Some(9),
            resolution.grid.cell(4, 4).unwrap().only_digit());
    }

    #[test]
    fn propagation_solver_stalls_on_unconstrained_grid() {
        let resolution = PropagationSolver.solve(&Grid::new());

        assert_eq!(Verdict::Incomplete, resolution.verdict);
        assert_eq!(0, resolution.change_count);
    }

    #[test]
    fn hypothesis_solver_reports_invalid_input() {
        // Two 5s in row 4; no amount of search can fix a broken given.
        let mut grid = Grid::new();
        grid.set_cell(1, 4, DigitSet::of(5).unwrap()).unwrap();
        grid.set_cell(6, 4, DigitSet::of(5).unwrap()).unwrap();

        let resolution = HypothesisSolver.solve(&grid);

        assert_eq!(Verdict::Invalid, resolution.verdict);
    }

    #[test]
    fn hypothesis_solver_preserves_solved_input_cells() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, DigitSet::of(3).unwrap()).unwrap();
        grid.set_cell(8, 8, DigitSet::of(3).unwrap()).unwrap();

        let resolution = HypothesisSolver.solve(&grid);

        assert_eq!(Verdict::Complete, resolution.verdict);
        assert_eq!(Some(3),
            resolution.grid.cell(0, 0).unwrap().only_digit());
        assert_eq!(Some(3),
            resolution.grid.cell(8, 8).unwrap().only_digit());
    }
}
