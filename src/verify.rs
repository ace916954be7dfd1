//! This module contains the logic for classifying grids as invalid,
//! incomplete, or complete.
//!
//! A row, column, or box is *invalid* as soon as two of its solved cells
//! share a digit. The checks fold the solved cells' masks with XOR: XOR-ing
//! in a digit that was already seen clears its bit again, so the
//! accumulator fails to strictly increase exactly when a duplicate occurs.
//! An accumulator of all nine bits means every digit is placed.

use crate::{index, BOX_ORIGINS, BOX_SIZE, Grid, SIZE};
use crate::cell::DigitSet;
use crate::error::{GridError, GridResult};

use serde::{Deserialize, Serialize};

/// The classification of a [Grid], a row, a column, or a box.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Verdict {

    /// Two solved cells of some row, column, or box share a digit. The grid
    /// (or the hypothesis that led to it) admits no solution.
    Invalid,

    /// No duplicates were found, but not every digit is placed yet.
    Incomplete,

    /// Every row, column, and box contains each digit exactly once.
    Complete
}

fn check_cells(cells: impl Iterator<Item = DigitSet>) -> Verdict {
    let mut seen = 0u16;

    for cell in cells {
        if cell.is_solved() {
            let bits = cell.bits();

            if (seen ^ bits) < seen {
                return Verdict::Invalid;
            }

            seen ^= bits;
        }
    }

    if seen == DigitSet::all().bits() {
        Verdict::Complete
    }
    else {
        Verdict::Incomplete
    }
}

/// Classifies a single row of the given grid. Only solved cells are
/// considered; remaining candidates of unsolved cells cannot cause
/// duplicates.
///
/// # Errors
///
/// If `row` is not in the range `[0, 9[`. In that case,
/// `GridError::OutOfBounds` is returned.
pub fn check_row(grid: &Grid, row: usize) -> GridResult<Verdict> {
    if row >= SIZE {
        return Err(GridError::OutOfBounds);
    }

    Ok(check_cells((0..SIZE).map(|column| grid.cells()[index(column, row)])))
}

/// Classifies a single column of the given grid, analogously to
/// [check_row].
///
/// # Errors
///
/// If `column` is not in the range `[0, 9[`. In that case,
/// `GridError::OutOfBounds` is returned.
pub fn check_column(grid: &Grid, column: usize) -> GridResult<Verdict> {
    if column >= SIZE {
        return Err(GridError::OutOfBounds);
    }

    Ok(check_cells((0..SIZE).map(|row| grid.cells()[index(column, row)])))
}

/// Classifies a single 3x3 box of the given grid, analogously to
/// [check_row].
///
/// # Arguments
///
/// * `c0`: The column of the box's top-left cell. Must be 0, 3, or 6.
/// * `r0`: The row of the box's top-left cell. Must be 0, 3, or 6.
///
/// # Errors
///
/// If `c0` or `r0` is not a box origin coordinate. In that case,
/// `GridError::OutOfBounds` is returned.
pub fn check_box(grid: &Grid, c0: usize, r0: usize) -> GridResult<Verdict> {
    if c0 % BOX_SIZE != 0 || r0 % BOX_SIZE != 0 || c0 >= SIZE || r0 >= SIZE {
        return Err(GridError::OutOfBounds);
    }

    Ok(check_cells((0..SIZE)
        .map(|i| grid.cells()[index(c0 + i % BOX_SIZE, r0 + i / BOX_SIZE)])))
}

/// Classifies the given grid by checking every row, column, and box. If any
/// check finds a duplicate digit, the whole grid is [Verdict::Invalid],
/// even if other parts are complete. Otherwise the grid is
/// [Verdict::Complete] if all 27 checks are, and [Verdict::Incomplete] if
/// candidates remain anywhere.
pub fn classify(grid: &Grid) -> Verdict {
    let mut valid = true;
    let mut complete = true;

    for i in 0..SIZE {
        match check_row(grid, i).unwrap() {
            Verdict::Invalid => valid = false,
            Verdict::Incomplete => complete = false,
            Verdict::Complete => { }
        }

        match check_column(grid, i).unwrap() {
            Verdict::Invalid => valid = false,
            Verdict::Incomplete => complete = false,
            Verdict::Complete => { }
        }
    }

    for &(c0, r0) in BOX_ORIGINS.iter() {
        match check_box(grid, c0, r0).unwrap() {
            Verdict::Invalid => valid = false,
            Verdict::Incomplete => complete = false,
            Verdict::Complete => { }
        }
    }

    if !valid {
        Verdict::Invalid
    }
    else if complete {
        Verdict::Complete
    }
    else {
        Verdict::Incomplete
    }
}
