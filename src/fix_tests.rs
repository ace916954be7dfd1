use crate::Grid;
use crate::solver::{HypothesisSolver, PropagationSolver, Resolution, Solver};
use crate::verify::{classify, Verdict};

// The example puzzles are taken from the World Puzzle Federation Sudoku
// Grand Prix:
//
// Classic: GP 2020 Round 8 (Puzzle 2)
// Puzzles: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf
// Solutions: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8_SB.pdf
//
// Hard: GP 2020 Round 5 (Puzzle 5)
// Puzzle: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound5.pdf
// Solution: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound5_SB.pdf

fn assert_solves_correctly(puzzle: &str, solution: &str,
        solver: &impl Solver) -> Resolution {
    let puzzle = Grid::parse(puzzle).unwrap();
    let expected = Grid::parse(solution).unwrap();
    let resolution = solver.solve(&puzzle);

    assert_eq!(Verdict::Complete, resolution.verdict);
    assert_eq!(expected, resolution.grid, "Solver gave wrong grid.");
    assert!(resolution.change_count > 0);

    resolution
}

#[test]
fn hypothesis_solves_classic_sudoku() {
    let puzzle = "
        0 0 0 0 8 1 0 0 0
        0 0 2 0 0 7 8 0 0
        0 5 3 0 0 0 1 7 0
        3 7 0 0 0 0 0 0 0
        6 0 0 0 0 0 0 0 3
        0 0 0 0 0 0 0 2 4
        0 6 9 0 0 0 2 3 0
        0 0 5 9 0 0 4 0 0
        0 0 0 6 5 0 0 0 0";
    let solution = "
        7 4 6 2 8 1 3 5 9
        9 1 2 5 3 7 8 4 6
        8 5 3 4 9 6 1 7 2
        3 7 4 1 2 5 6 9 8
        6 2 8 7 4 9 5 1 3
        5 9 1 3 6 8 7 2 4
        1 6 9 8 7 4 2 3 5
        2 8 5 9 1 3 4 6 7
        4 3 7 6 5 2 9 8 1";

    assert_solves_correctly(puzzle, solution, &HypothesisSolver);
}

#[test]
fn hypothesis_solves_hard_sudoku() {
    // Propagation alone is insufficient for this puzzle, so the search has
    // to place hypotheses.
    let puzzle = "
        0 5 0 3 0 0 0 7 0
        1 0 0 0 2 0 8 0 0
        0 2 0 4 0 9 0 0 0
        0 0 3 1 0 0 7 0 6
        0 4 0 0 6 0 0 5 0
        5 0 6 0 0 3 4 0 0
        0 0 0 8 0 2 0 3 0
        0 0 7 0 9 0 0 0 2
        0 6 0 0 0 1 0 8 0";
    let solution = "
        6 5 4 3 1 8 2 7 9
        1 3 9 7 2 6 8 4 5
        7 2 8 4 5 9 1 6 3
        8 9 3 1 4 5 7 2 6
        2 4 1 9 6 7 3 5 8
        5 7 6 2 8 3 4 9 1
        9 1 5 8 7 2 6 3 4
        3 8 7 6 9 4 5 1 2
        4 6 2 5 3 1 9 8 7";

    assert_solves_correctly(puzzle, solution, &HypothesisSolver);
}

#[test]
fn propagation_solves_simple_sudoku() {
    // This puzzle falls to naked singles alone, so the propagation solver
    // completes it without any hypothesis.
    let puzzle = "
        0 0 1 0 0 7 3 6 0
        7 2 0 0 8 0 5 0 9
        0 8 0 0 3 1 0 0 0
        0 0 0 6 7 0 0 3 5
        9 0 5 8 0 0 0 7 0
        2 6 0 0 1 0 0 0 4
        3 0 0 1 5 0 0 4 6
        0 7 4 0 0 3 0 5 2
        5 1 0 7 0 4 8 0 0";
    let solution = "
        4 5 1 2 9 7 3 6 8
        7 2 3 4 8 6 5 1 9
        6 8 9 5 3 1 4 2 7
        1 4 8 6 7 9 2 3 5
        9 3 5 8 4 2 6 7 1
        2 6 7 3 1 5 9 8 4
        3 9 2 1 5 8 7 4 6
        8 7 4 9 6 3 1 5 2
        5 1 6 7 2 4 8 9 3";

    assert_solves_correctly(puzzle, solution, &PropagationSolver);
}

#[test]
fn solvers_agree_on_propagation_solvable_sudoku() {
    let puzzle = Grid::parse("
        0 0 1 0 0 7 3 6 0
        7 2 0 0 8 0 5 0 9
        0 8 0 0 3 1 0 0 0
        0 0 0 6 7 0 0 3 5
        9 0 5 8 0 0 0 7 0
        2 6 0 0 1 0 0 0 4
        3 0 0 1 5 0 0 4 6
        0 7 4 0 0 3 0 5 2
        5 1 0 7 0 4 8 0 0").unwrap();

    let by_propagation = PropagationSolver.solve(&puzzle);
    let by_hypothesis = HypothesisSolver.solve(&puzzle);

    assert_eq!(by_propagation.grid, by_hypothesis.grid);
    assert_eq!(by_propagation.change_count, by_hypothesis.change_count);
}

#[test]
fn hypothesis_completes_unconstrained_grid() {
    // A grid of all zeros carries no information at all; the search has to
    // construct some valid grid from scratch.
    let resolution = HypothesisSolver.solve(&Grid::new());

    assert_eq!(Verdict::Complete, resolution.verdict);
    assert_eq!(Verdict::Complete, classify(&resolution.grid));
}

#[test]
fn duplicate_givens_are_rejected_before_search() {
    let puzzle = Grid::parse("
        0 5 0 0 0 0 5 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0 0").unwrap();

    assert_eq!(Verdict::Invalid, HypothesisSolver.solve(&puzzle).verdict);
    assert_eq!(Verdict::Invalid, classify(&puzzle));
}
