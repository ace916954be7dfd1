//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [GridParseError](enum.GridParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than 8.
    OutOfBounds,

    /// Indicates that some digit is invalid, that is, not in the range
    /// `[1, 9]`.
    InvalidDigit,

    /// An error that is raised whenever it is attempted to fill a grid whose
    /// present digits admit no complete solution.
    Unsatisfiable
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](../struct.Grid.html) from its text code.
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of data rows (lines which are neither empty
    /// nor comments) is not exactly 9.
    WrongNumberOfRows,

    /// Indicates that some data row does not contain exactly 9
    /// whitespace-separated cell values.
    WrongNumberOfColumns,

    /// Indicates that one of the cell values could not be parsed as a
    /// non-negative integer.
    NumberFormatError
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}
