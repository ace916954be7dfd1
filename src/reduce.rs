//! This module contains the reducers which eliminate candidate digits from
//! grid cells, and the propagation loop which drives them to a fixed point.
//!
//! Three kinds of reduction are applied:
//!
//! * Line reduction: a confirmed digit is cleared from the remaining cells
//! of its row and column.
//! * Box reduction: within one 3x3 box, solved cells clear their digit from
//! the box's other cells (naked singles), and a digit that fits only one
//! cell of the box collapses that cell (hidden singles).
//! * Intersection reduction: a digit whose box candidates all lie on one
//! row or column (a pointing pair or triple) is cleared from the rest of
//! that line outside the box.
//!
//! Every reducer returns the number of cells it changed. Reducers only ever
//! clear candidates from cells holding two or more of them, so no cell ever
//! ends up with an empty candidate set and the total candidate count of the
//! grid strictly decreases with every change, which bounds the number of
//! iterations any of the loops below can make.

use crate::{index, BOX_ORIGINS, BOX_SIZE, CELL_COUNT, Grid, SIZE};
use crate::cell::DigitSet;
use crate::error::{GridError, GridResult};

use std::ops::RangeInclusive;

fn verify_line_index(i: usize) -> GridResult<()> {
    if i >= SIZE {
        Err(GridError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

fn verify_box_origin(c0: usize, r0: usize) -> GridResult<()> {
    if c0 % BOX_SIZE != 0 || r0 % BOX_SIZE != 0 || c0 >= SIZE || r0 >= SIZE {
        Err(GridError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

/// Clears the given digit from every unsolved cell of the given row and
/// returns the number of cells changed. Solved cells are never touched.
///
/// # Arguments
///
/// * `row`: The row to reduce. Must be in the range `[0, 9[`.
/// * `digit`: The digit to clear. Must be in the range `[1, 9]`.
/// * `skip`: If present, columns in this range are left alone. The
/// intersection reducer passes the span of the box that confines the digit,
/// since clearing it there would destroy the very candidates that justify
/// the reduction.
///
/// # Errors
///
/// * `GridError::OutOfBounds` If `row` is not in the specified range.
/// * `GridError::InvalidDigit` If `digit` is not in the specified range.
pub fn reduce_row(grid: &mut Grid, row: usize, digit: usize,
        skip: Option<RangeInclusive<usize>>) -> GridResult<usize> {
    verify_line_index(row)?;
    DigitSet::of(digit)?;

    let mut change_count = 0;

    for column in 0..SIZE {
        if let Some(skip) = &skip {
            if skip.contains(&column) {
                continue;
            }
        }

        let cell = &mut grid.cells_mut()[index(column, row)];

        if !cell.is_solved() && cell.remove(digit).unwrap() {
            debug_assert!(!cell.is_empty());
            change_count += 1;
        }
    }

    Ok(change_count)
}

/// Clears the given digit from every unsolved cell of the given column and
/// returns the number of cells changed, analogously to [reduce_row]. `skip`
/// ranges over rows here.
///
/// # Errors
///
/// * `GridError::OutOfBounds` If `column` is not in the range `[0, 9[`.
/// * `GridError::InvalidDigit` If `digit` is not in the range `[1, 9]`.
pub fn reduce_column(grid: &mut Grid, column: usize, digit: usize,
        skip: Option<RangeInclusive<usize>>) -> GridResult<usize> {
    verify_line_index(column)?;
    DigitSet::of(digit)?;

    let mut change_count = 0;

    for row in 0..SIZE {
        if let Some(skip) = &skip {
            if skip.contains(&row) {
                continue;
            }
        }

        let cell = &mut grid.cells_mut()[index(column, row)];

        if !cell.is_solved() && cell.remove(digit).unwrap() {
            debug_assert!(!cell.is_empty());
            change_count += 1;
        }
    }

    Ok(change_count)
}

/// The cells of one box that hold a given candidate digit: none, exactly
/// one (at the contained linear index), or more than one.
enum Location {
    None,
    One(usize),
    Multiple
}

impl Location {
    fn union(&self, i: usize) -> Location {
        match self {
            Location::None => Location::One(i),
            Location::One(_) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

/// Reduces the 3x3 box with its top-left cell at column `c0` and row `r0`
/// in two phases and returns the number of cells changed.
///
/// The first phase clears the digit of every solved cell from the box's
/// other cells, repeated until it causes no further change, since a newly
/// solved cell can cascade. The second phase looks for digits that are
/// contained in exactly one unsolved cell of the box and collapses that
/// cell to the digit, likewise repeated until stable. A second-phase
/// collapse can enable further first-phase eliminations; those are picked
/// up when the propagation loop calls this function again.
///
/// # Errors
///
/// If `(c0, r0)` is not a box origin, i.e. both coordinates a multiple of 3
/// below 9. In that case, `GridError::OutOfBounds` is returned.
pub fn reduce_box(grid: &mut Grid, c0: usize, r0: usize) -> GridResult<usize> {
    verify_box_origin(c0, r0)?;

    let mut change_count = 0;

    // Phase 1: naked singles.
    loop {
        let mut changed = 0;

        for column in c0..(c0 + BOX_SIZE) {
            for row in r0..(r0 + BOX_SIZE) {
                let solved = grid.cells()[index(column, row)].only_digit();

                if let Some(digit) = solved {
                    for column_2 in c0..(c0 + BOX_SIZE) {
                        for row_2 in r0..(r0 + BOX_SIZE) {
                            let cell = &mut grid.cells_mut()
                                [index(column_2, row_2)];

                            if !cell.is_solved() &&
                                    cell.remove(digit).unwrap() {
                                debug_assert!(!cell.is_empty());
                                changed += 1;
                            }
                        }
                    }
                }
            }
        }

        change_count += changed;

        if changed == 0 {
            break;
        }
    }

    // Phase 2: hidden singles.
    loop {
        let mut changed = 0;

        for digit in 1..=SIZE {
            let mut location = Location::None;

            for column in c0..(c0 + BOX_SIZE) {
                for row in r0..(r0 + BOX_SIZE) {
                    let cell = grid.cells()[index(column, row)];

                    if !cell.is_solved() && cell.contains(digit) {
                        location = location.union(index(column, row));
                    }
                }
            }

            if let Location::One(i) = location {
                grid.cells_mut()[i] = DigitSet::of(digit).unwrap();
                changed += 1;
            }
        }

        change_count += changed;

        if changed == 0 {
            break;
        }
    }

    Ok(change_count)
}

/// Searches the 3x3 box with its top-left cell at column `c0` and row `r0`
/// for pointing pairs and triples and propagates them, returning the number
/// of cells changed.
///
/// For every digit held by exactly 2 or 3 of the box's unsolved cells whose
/// positions all share one row (or all share one column), the digit must be
/// placed on that line inside the box, so it is cleared from the line's
/// cells outside the box via [reduce_row] (or [reduce_column]) with the box
/// span as the skip range. The row and column alignments are tested
/// independently.
///
/// # Errors
///
/// If `(c0, r0)` is not a box origin, i.e. both coordinates a multiple of 3
/// below 9. In that case, `GridError::OutOfBounds` is returned.
pub fn reduce_box_vectors(grid: &mut Grid, c0: usize, r0: usize)
        -> GridResult<usize> {
    verify_box_origin(c0, r0)?;

    let mut change_count = 0;

    for digit in 1..=SIZE {
        let mut candidates = Vec::new();

        for column in c0..(c0 + BOX_SIZE) {
            for row in r0..(r0 + BOX_SIZE) {
                let cell = grid.cells()[index(column, row)];

                if !cell.is_solved() && cell.contains(digit) {
                    candidates.push((column, row));
                }
            }
        }

        if candidates.len() < 2 || candidates.len() > BOX_SIZE {
            continue;
        }

        let (first_column, first_row) = candidates[0];

        if candidates.iter().all(|&(_, row)| row == first_row) {
            change_count += reduce_row(grid, first_row, digit,
                Some(c0..=(c0 + BOX_SIZE - 1))).unwrap();
        }

        if candidates.iter().all(|&(column, _)| column == first_column) {
            change_count += reduce_column(grid, first_column, digit,
                Some(r0..=(r0 + BOX_SIZE - 1))).unwrap();
        }
    }

    Ok(change_count)
}

/// Scans all 81 cells and, for every solved cell, clears its digit from the
/// rest of its row and column. The scan is repeated until one full pass
/// makes no change, since an elimination can solve further cells. Returns
/// the total number of cells changed.
pub fn reduce_all_rows_and_columns(grid: &mut Grid) -> usize {
    let mut change_count = 0;

    loop {
        let mut changed = 0;

        for i in 0..CELL_COUNT {
            if let Some(digit) = grid.cells()[i].only_digit() {
                let row = i / SIZE;
                let column = i % SIZE;

                changed += reduce_row(grid, row, digit, None).unwrap();
                changed += reduce_column(grid, column, digit, None).unwrap();
            }
        }

        change_count += changed;

        if changed == 0 {
            break;
        }
    }

    change_count
}

/// Applies [reduce_box] to all nine boxes once and returns the total number
/// of cells changed.
pub fn reduce_all_boxes(grid: &mut Grid) -> usize {
    let mut change_count = 0;

    for &(c0, r0) in BOX_ORIGINS.iter() {
        change_count += reduce_box(grid, c0, r0).unwrap();
    }

    change_count
}

/// Applies [reduce_box_vectors] to all nine boxes once and returns the
/// total number of cells changed.
pub fn reduce_all_vectors(grid: &mut Grid) -> usize {
    let mut change_count = 0;

    for &(c0, r0) in BOX_ORIGINS.iter() {
        change_count += reduce_box_vectors(grid, c0, r0).unwrap();
    }

    change_count
}

/// Runs the line, box, and intersection reductions over the whole grid
/// until a full round of all three passes makes no change, and returns the
/// total number of cells changed.
///
/// Each pass runs to completion once per round rather than being iterated
/// to its own fixed point first, so several rounds may be needed before the
/// grid stabilizes.
pub fn propagate(grid: &mut Grid) -> usize {
    let mut change_count = 0;

    loop {
        let line_changes = reduce_all_rows_and_columns(grid);
        let box_changes = reduce_all_boxes(grid);
        let vector_changes = reduce_all_vectors(grid);

        change_count += line_changes + box_changes + vector_changes;

        if line_changes == 0 && box_changes == 0 && vector_changes == 0 {
            break;
        }
    }

    change_count
}
