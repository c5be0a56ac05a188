//! Homogeneous tables built from content records.
//!
//! A [Table] can only be obtained through a validating constructor, so a
//! value of this type always satisfies two invariants: every row has exactly
//! one cell per declared column, and every cell holds the kind of value its
//! column declares.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::error::DataShapeError;
use crate::error::Result;

/// The kind of value a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Free text.
    Text,
    /// A decimal number.
    Number,
}

impl Display for CellKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellKind::Text => f.write_str("text"),
            CellKind::Number => f.write_str("number"),
        }
    }
}

/// A single value in a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// A text value.
    Text(String),
    /// A numeric value, displayed in its shortest round-trip form.
    Number(f64),
}

impl Cell {
    /// Returns the kind of value held by this cell.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Text(_) => CellKind::Text,
            Cell::Number(_) => CellKind::Number,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Number(value) => Display::fmt(value, f),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_owned())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// A declared table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// The header shown above the column.
    pub header: &'static str,
    /// The kind of value every cell of the column holds.
    pub kind: CellKind,
}

impl Column {
    /// Declares a text column.
    pub const fn text(header: &'static str) -> Column {
        Self {
            header,
            kind: CellKind::Text,
        }
    }

    /// Declares a numeric column.
    pub const fn number(header: &'static str) -> Column {
        Self {
            header,
            kind: CellKind::Number,
        }
    }
}

/// A record type that can be laid out as a table row.
pub trait TableRecord {
    /// The name of the table built from these records.
    const NAME: &'static str;

    /// The columns of the table, in display order.
    fn schema() -> Vec<Column>;

    /// The cells of this record, in the order of [TableRecord::schema].
    fn cells(&self) -> Vec<Cell>;
}

/// The literal values of a declared column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    /// Text values.
    Text(&'static [&'static str]),
    /// Numeric values.
    Number(&'static [f64]),
}

impl Values {
    /// The number of values.
    pub fn len(&self) -> usize {
        match self {
            Values::Text(values) => values.len(),
            Values::Number(values) => values.len(),
        }
    }

    /// Whether the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The values as table cells, in declaration order.
    pub fn cells(&self) -> Vec<Cell> {
        match self {
            Values::Text(values) => values.iter().copied().map(Cell::from).collect(),
            Values::Number(values) => values.iter().copied().map(Cell::from).collect(),
        }
    }
}

/// A column declared together with its values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnValues {
    /// The declared column.
    pub column: Column,
    /// The values of the column, one per row.
    pub values: Values,
}

impl ColumnValues {
    /// Declares a text column with its values.
    pub const fn text(header: &'static str, values: &'static [&'static str]) -> ColumnValues {
        Self {
            column: Column::text(header),
            values: Values::Text(values),
        }
    }

    /// Declares a numeric column with its values.
    pub const fn number(header: &'static str, values: &'static [f64]) -> ColumnValues {
        Self {
            column: Column::number(header),
            values: Values::Number(values),
        }
    }
}

/// Where the data of a table is declared: typed records, one per row, or
/// literal columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableSource<R: 'static> {
    /// One record per row.
    Rows(&'static [R]),
    /// One entry per column.
    Columns(&'static [ColumnValues]),
}

impl<R: TableRecord> TableSource<R> {
    /// Builds and validates the table, named after the record type.
    pub fn table(&self) -> Result<Table> {
        match self {
            TableSource::Rows(rows) => Table::from_records(rows),
            TableSource::Columns(columns) => Table::from_columns(
                R::NAME,
                columns
                    .iter()
                    .map(|declared| (declared.column, declared.values.cells()))
                    .collect(),
            ),
        }
    }
}

/// A validated, homogeneous table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table from row-oriented data.
    pub fn new(name: impl Into<String>, columns: Vec<Column>, rows: Vec<Vec<Cell>>) -> Result<Table> {
        let name = name.into();

        if columns.is_empty() {
            return Err(DataShapeError::EmptySchema { table: name });
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DataShapeError::RaggedRow {
                    table: name,
                    row: idx,
                    expected: columns.len(),
                    found: row.len(),
                });
            }

            let mismatch = row
                .iter()
                .zip(&columns)
                .find(|(cell, column)| cell.kind() != column.kind);

            if let Some((cell, column)) = mismatch {
                return Err(DataShapeError::TypeMismatch {
                    table: name,
                    row: idx,
                    column: column.header.to_owned(),
                    expected: column.kind,
                    found: cell.kind(),
                });
            }
        }

        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    /// Builds a table from column-oriented data, where each column carries
    /// its own list of values. All columns must be of the same length.
    pub fn from_columns(
        name: impl Into<String>,
        columns: Vec<(Column, Vec<Cell>)>,
    ) -> Result<Table> {
        let name = name.into();

        let Some(expected) = columns.first().map(|(_, values)| values.len()) else {
            return Err(DataShapeError::EmptySchema { table: name });
        };

        if let Some((column, values)) = columns.iter().find(|(_, values)| values.len() != expected) {
            return Err(DataShapeError::RaggedColumn {
                table: name,
                column: column.header.to_owned(),
                expected,
                found: values.len(),
            });
        }

        let mut schema = Vec::with_capacity(columns.len());
        let mut rows: Vec<Vec<Cell>> = (0..expected)
            .map(|_| Vec::with_capacity(columns.len()))
            .collect();

        for (column, values) in columns {
            schema.push(column);

            for (row, value) in rows.iter_mut().zip(values) {
                row.push(value);
            }
        }

        Table::new(name, schema, rows)
    }

    /// Builds a table with one row per record, in declaration order.
    pub fn from_records<R: TableRecord>(records: &[R]) -> Result<Table> {
        let rows = records.iter().map(TableRecord::cells).collect();
        Table::new(R::NAME, R::schema(), rows)
    }

    /// The name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared columns, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows, in display order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}
