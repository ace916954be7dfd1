// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a compact engine for solving ordinary 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Constraint propagation which eliminates candidate digits from cells
//! using row, column, box, and box-line-intersection reasoning
//! * Classification of grids as invalid, incomplete, or complete
//! * A hypothesis search which speculatively places digits and backtracks
//! whenever propagation runs into a contradiction
//! * Generating random puzzles with a controllable difficulty
//!
//! Every cell of a [Grid] stores the set of digits that are still possible
//! at that position as a [DigitSet](cell::DigitSet). Solving a puzzle means
//! shrinking these sets until each contains exactly one digit.
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! ```
//! use sudoku_resolver::Grid;
//!
//! let grid = Grid::parse("
//!     ## A puzzle with a single clue.
//!     5 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0
//!     0 0 0 0 0 0 0 0 0").unwrap();
//!
//! assert_eq!(Some(5), grid.cell(0, 0).unwrap().only_digit());
//! assert_eq!(9, grid.cell(1, 0).unwrap().len());
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! Two solvers are provided, both implementing the
//! [Solver](solver::Solver) trait. The
//! [PropagationSolver](solver::PropagationSolver) only applies candidate
//! elimination and stops at its fixed point, while the
//! [HypothesisSolver](solver::HypothesisSolver) additionally searches over
//! speculative digit placements and therefore completes every satisfiable
//! puzzle.
//!
//! ```
//! use sudoku_resolver::Grid;
//! use sudoku_resolver::solver::{HypothesisSolver, Solver};
//! use sudoku_resolver::verify::Verdict;
//!
//! let grid = Grid::parse("
//!     0 0 0 0 8 1 0 0 0
//!     0 0 2 0 0 7 8 0 0
//!     0 5 3 0 0 0 1 7 0
//!     3 7 0 0 0 0 0 0 0
//!     6 0 0 0 0 0 0 0 3
//!     0 0 0 0 0 0 0 2 4
//!     0 6 9 0 0 0 2 3 0
//!     0 0 5 9 0 0 4 0 0
//!     0 0 0 6 5 0 0 0 0").unwrap();
//! let resolution = HypothesisSolver.solve(&grid);
//!
//! assert_eq!(Verdict::Complete, resolution.verdict);
//! assert!(resolution.change_count > 0);
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) produces random complete grids and a
//! [Reducer](generator::Reducer) removes clues for as long as a given solver
//! still completes the puzzle, which controls the difficulty.
//!
//! ```
//! use sudoku_resolver::generator::{Generator, Reducer};
//! use sudoku_resolver::solver::{PropagationSolver, Solver};
//! use sudoku_resolver::verify::{classify, Verdict};
//!
//! let mut generator = Generator::new_default();
//! let mut puzzle = generator.generate().unwrap();
//! assert_eq!(Verdict::Complete, classify(&puzzle));
//!
//! let mut reducer = Reducer::new_default();
//! reducer.reduce(&mut puzzle);
//!
//! let resolution = PropagationSolver.solve(&puzzle);
//! assert_eq!(Verdict::Complete, resolution.verdict);
//! ```

pub mod cell;
pub mod error;
pub mod generator;
pub mod reduce;
pub mod solver;
pub mod verify;

#[cfg(test)]
mod fix_tests;

pub use crate::cell::DigitSet;

use crate::error::{GridError, GridParseError, GridParseResult, GridResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeserializeError;

use std::fmt::{self, Display, Formatter};

/// The number of cells on one axis of the grid.
pub const SIZE: usize = 9;

/// The number of cells on one axis of a box, which is also the number of
/// boxes on one axis of the grid.
pub const BOX_SIZE: usize = 3;

pub(crate) const CELL_COUNT: usize = SIZE * SIZE;

/// The top-left coordinates `(c0, r0)` of the nine 3x3 boxes in
/// left-to-right, top-to-bottom order.
pub(crate) const BOX_ORIGINS: [(usize, usize); SIZE] = [
    (0, 0), (3, 0), (6, 0),
    (0, 3), (3, 3), (6, 3),
    (0, 6), (3, 6), (6, 6)
];

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid in which every cell holds the [DigitSet] of digits
/// still possible at that position. A freshly encoded grid holds singleton
/// sets for clue cells and full sets everywhere else; reducers then shrink
/// the sets in place.
///
/// Grids have value semantics. The hypothesis search clones the entire grid
/// at every branch point, so speculative eliminations of one branch are
/// never observed by another.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: [DigitSet; CELL_COUNT]
}

impl Grid {

    /// Creates a new grid about which nothing is known, i.e. every cell
    /// holds all nine candidate digits.
    pub fn new() -> Grid {
        Grid {
            cells: [DigitSet::all(); CELL_COUNT]
        }
    }

    /// Encodes a 9x9 array of raw clue values into a grid. The outer array
    /// contains the rows top-to-bottom, each row left-to-right. A value of 0
    /// means the cell is empty and yields the full candidate set; any other
    /// value is interpreted by [DigitSet::from_clue].
    pub fn from_clues(clues: &[[usize; SIZE]; SIZE]) -> Grid {
        let mut grid = Grid::new();

        for (row, row_clues) in clues.iter().enumerate() {
            for (column, &clue) in row_clues.iter().enumerate() {
                grid.cells[index(column, row)] = DigitSet::from_clue(clue);
            }
        }

        grid
    }

    /// Parses a grid code. The code must contain exactly 9 data lines, each
    /// holding 9 whitespace-separated non-negative integers. A value of 0
    /// marks an empty cell; a value with several decimal digits seeds the
    /// cell with each of its digits as candidates (see
    /// [DigitSet::from_clue]). Lines that are empty or start with `#` are
    /// ignored, so grid files can carry comments.
    ///
    /// ```
    /// use sudoku_resolver::Grid;
    ///
    /// let grid = Grid::parse("
    ///     ## an empty grid
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0
    ///     0 0 0 0 0 0 0 0 0").unwrap();
    ///
    /// assert_eq!(9 * 9 * 9, grid.candidate_count());
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let mut grid = Grid::new();
        let mut row = 0;

        for line in code.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if row == SIZE {
                return Err(GridParseError::WrongNumberOfRows);
            }

            let values: Vec<&str> = line.split_whitespace().collect();

            if values.len() != SIZE {
                return Err(GridParseError::WrongNumberOfColumns);
            }

            for (column, value) in values.iter().enumerate() {
                let clue = value.parse::<usize>()?;
                grid.cells[index(column, row)] = DigitSet::from_clue(clue);
            }

            row += 1;
        }

        if row != SIZE {
            return Err(GridParseError::WrongNumberOfRows);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. Solved cells print their digit, cells with all nine
    /// candidates print 0, and partially reduced cells print the ascending
    /// concatenation of their remaining candidates.
    ///
    /// ```
    /// use sudoku_resolver::Grid;
    ///
    /// let code = "\
    ///     1 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0\n\
    ///     0 0 0 0 0 0 0 0 0";
    /// let grid = Grid::parse(code).unwrap();
    ///
    /// assert_eq!(grid, Grid::parse(&grid.to_parseable_string()).unwrap());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut result = String::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if column > 0 {
                    result.push(' ');
                }

                let cell = self.cells[index(column, row)];

                if cell == DigitSet::all() {
                    result.push('0');
                }
                else {
                    result.push_str(&cell.to_string());
                }
            }

            if row < SIZE - 1 {
                result.push('\n');
            }
        }

        result
    }

    fn verified_index(column: usize, row: usize) -> GridResult<usize> {
        if column >= SIZE || row >= SIZE {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(index(column, row))
        }
    }

    /// Gets the candidate set of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn cell(&self, column: usize, row: usize) -> GridResult<DigitSet> {
        Ok(self.cells[Grid::verified_index(column, row)?])
    }

    /// Replaces the candidate set of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `cell`: The new candidate set of the specified cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn set_cell(&mut self, column: usize, row: usize, cell: DigitSet)
            -> GridResult<()> {
        self.cells[Grid::verified_index(column, row)?] = cell;
        Ok(())
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[DigitSet; CELL_COUNT] {
        &self.cells
    }

    /// Gets a mutable reference to the array which holds the cells. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn cells_mut(&mut self) -> &mut [DigitSet; CELL_COUNT] {
        &mut self.cells
    }

    /// Counts the total number of candidate digits over all cells. A grid
    /// about which nothing is known counts 729, a completely solved one 81.
    /// Reducers never increase this number.
    pub fn candidate_count(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }

    /// Counts the cells which are solved, i.e. hold exactly one candidate.
    pub fn count_solved(&self) -> usize {
        self.cells.iter().filter(|c| c.is_solved()).count()
    }
}

fn to_char(cell: DigitSet) -> char {
    if let Some(digit) = cell.only_digit() {
        (b'0' + digit as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for Grid {

    /// Renders the grid with box-drawing characters. Solved cells show
    /// their digit, all other cells are blank.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_parseable_string())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D)
            -> Result<Grid, D::Error> {
        let code = String::deserialize(deserializer)?;
        Grid::parse(&code)
            .map_err(|e| DeserializeError::custom(format!("{:?}", e)))
    }
}
