//! Defines the `Error` and `Result` types that this crate uses.

use thiserror::Error;

use crate::table::CellKind;

/// The result type that uses [DataShapeError] as the error type.
pub type Result<T> = std::result::Result<T, DataShapeError>;

/// The error type raised when a content table is internally inconsistent.
///
/// A shape error always points at a bug in the content definitions, so it is
/// reported with enough context to find the offending literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DataShapeError {
    /// The table declares no columns at all.
    #[error("data shape error: table `{table}` declares no columns")]
    EmptySchema {
        /// The name of the table.
        table: String,
    },

    /// A row holds a different number of cells than the table has columns.
    #[error("data shape error: table `{table}`, row {row} has {found} cells but {expected} columns are declared")]
    RaggedRow {
        /// The name of the table.
        table: String,
        /// The zero-based index of the row.
        row: usize,
        /// The number of declared columns.
        expected: usize,
        /// The number of cells in the row.
        found: usize,
    },

    /// A column holds a different number of values than the first column.
    #[error("data shape error: table `{table}`, column `{column}` has {found} values but {expected} are expected")]
    RaggedColumn {
        /// The name of the table.
        table: String,
        /// The header of the column.
        column: String,
        /// The number of values in the first column.
        expected: usize,
        /// The number of values in this column.
        found: usize,
    },

    /// A cell does not hold the kind of value its column declares.
    #[error("data shape error: table `{table}`, row {row}, column `{column}` holds a {found} value but the column is {expected}")]
    TypeMismatch {
        /// The name of the table.
        table: String,
        /// The zero-based index of the row.
        row: usize,
        /// The header of the column.
        column: String,
        /// The kind declared by the column.
        expected: CellKind,
        /// The kind of the offending cell.
        found: CellKind,
    },
}
