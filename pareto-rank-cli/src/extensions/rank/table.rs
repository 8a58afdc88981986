//! Reads objective values from delimited text tables and merges ranks back.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/rank/table_test.rs"]
mod table_test;

use super::{ColumnRef, InvalidRowPolicy, TableLayout};
use pareto_rank::prelude::*;
use rustc_hash::FxHashMap;
use std::io::{Read, Write};

/// A table of string cells as it is read from a delimited text file. Rows may have different
/// length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

/// Objective values selected from the table.
pub struct ObjectiveSelection {
    /// A validated matrix of objective values.
    pub matrix: ObjectiveMatrix,
    /// A table row index for each matrix row.
    pub row_indices: Vec<usize>,
    /// Indices of table rows excluded from ranking.
    pub skipped: Vec<usize>,
    /// Resolved objective column indices.
    pub columns: Vec<usize>,
}

impl Table {
    /// Creates a new instance of `Table`.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns table rows.
    pub fn rows(&self) -> &[Vec<String>] {
        self.rows.as_slice()
    }

    /// Returns amount of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a cell value if it exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|cells| cells.get(column)).map(|cell| cell.as_str())
    }

    /// Returns amount of cells in the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|cells| cells.len()).max().unwrap_or(0)
    }

    fn set_cell(&mut self, row: usize, column: usize, value: String) {
        if let Some(cells) = self.rows.get_mut(row) {
            if cells.len() <= column {
                cells.resize(column + 1, String::new());
            }
            cells[column] = value;
        }
    }

    fn get_header_index(&self, header_rows: usize) -> Option<FxHashMap<&str, usize>> {
        let header = self.rows.get(header_rows.checked_sub(1)?)?;

        Some(header.iter().enumerate().fold(FxHashMap::default(), |mut acc, (idx, name)| {
            acc.entry(name.trim()).or_insert(idx);
            acc
        }))
    }

    fn resolve_column(&self, column: &ColumnRef, header_rows: usize) -> Option<usize> {
        match column {
            ColumnRef::Index(index) => Some(*index),
            ColumnRef::Name(name) => self.get_header_index(header_rows)?.get(name.as_str()).copied(),
        }
    }
}

/// Reads a table from delimited text.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> GenericResult<Table> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(false).flexible(true).delimiter(delimiter).from_reader(reader);

    let rows = reader
        .records()
        .map(|record| record.map(|record| record.iter().map(|cell| cell.to_string()).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot read table: '{err}'"))?;

    Ok(Table::new(rows))
}

/// Writes a table as delimited text.
pub fn write_table<W: Write>(writer: W, table: &Table, delimiter: u8) -> GenericResult<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).delimiter(delimiter).from_writer(writer);

    table
        .rows()
        .iter()
        .try_for_each(|row| writer.write_record(row))
        .map_err(|err| format!("cannot write table: '{err}'"))?;
    writer.flush()?;

    Ok(())
}

/// Selects objective values of rows within the layout's window.
pub fn select_objectives(
    table: &Table,
    layout: &TableLayout,
    logger: &InfoLogger,
) -> GenericResult<ObjectiveSelection> {
    let columns = layout
        .objectives
        .iter()
        .map(|column| {
            table.resolve_column(column, layout.header_rows).ok_or_else(|| {
                GenericError::from(format!("cannot find objective column {column} in the header"))
            })
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let mut data = Vec::new();
    let mut row_indices = Vec::new();
    let mut skipped = Vec::new();

    for row_idx in get_window_range(table, layout) {
        match parse_objectives(table, row_idx, &columns) {
            Ok(values) if values.iter().all(|value| value.is_finite()) => {
                data.extend(values);
                row_indices.push(row_idx);
            }
            Ok(values) if layout.invalid_rows == InvalidRowPolicy::Fail => {
                // engine validation reports non-finite value
                data.extend(values);
                row_indices.push(row_idx);
            }
            Err(err) if layout.invalid_rows == InvalidRowPolicy::Fail => return Err(err),
            result => {
                let reason =
                    result.err().map_or_else(|| "non-finite objective value".to_string(), |err| err.to_string());
                (logger)(&format!("skip row {}: {reason}", row_idx + 1));
                skipped.push(row_idx);
            }
        }
    }

    let matrix = ObjectiveMatrix::from_flat(data, columns.len()).map_err(|err| match err {
        RankError::InvalidValue { row, column, value } => GenericError::from(format!(
            "row {} has non-finite value '{value}' in column {}",
            row_indices[row] + 1,
            columns[column]
        )),
        err => err.into(),
    })?;

    Ok(ObjectiveSelection { matrix, row_indices, skipped, columns })
}

/// Writes ranks of selected rows into the rank column. Skipped rows receive an empty cell, rows
/// outside of the window are left untouched.
pub fn merge_ranks(
    table: &mut Table,
    layout: &TableLayout,
    selection: &ObjectiveSelection,
    ranks: &[Rank],
) -> GenericResult<()> {
    if ranks.len() != selection.row_indices.len() {
        return Err(format!("expected {} ranks, got {}", selection.row_indices.len(), ranks.len()).into());
    }

    // unknown name appends a new column with that name in the header
    let (rank_column, new_header) = match &layout.rank_column {
        ColumnRef::Index(index) => (*index, None),
        ColumnRef::Name(name) => match table.resolve_column(&layout.rank_column, layout.header_rows) {
            Some(column) => (column, None),
            None => (table.width(), Some(name.clone())),
        },
    };

    if selection.columns.contains(&rank_column) {
        return Err(format!("rank column #{rank_column} overlaps with objective columns").into());
    }

    if let (Some(name), Some(header_idx)) = (new_header, layout.header_rows.checked_sub(1)) {
        table.set_cell(header_idx, rank_column, name);
    }

    selection.row_indices.iter().zip(ranks.iter()).for_each(|(&row_idx, rank)| {
        table.set_cell(row_idx, rank_column, rank.to_string());
    });

    selection.skipped.iter().for_each(|&row_idx| table.set_cell(row_idx, rank_column, String::new()));

    Ok(())
}

fn get_window_range(table: &Table, layout: &TableLayout) -> std::ops::Range<usize> {
    let start = layout.rows.first.map_or(0, |first| first - 1).max(layout.header_rows);
    let end = layout.rows.last.map_or(table.len(), |last| last.min(table.len()));

    start..end.max(start)
}

fn parse_objectives(table: &Table, row_idx: usize, columns: &[usize]) -> GenericResult<Vec<f64>> {
    columns
        .iter()
        .map(|&column| -> GenericResult<f64> {
            let cell = table
                .cell(row_idx, column)
                .ok_or_else(|| format!("row {} has no value in column {column}", row_idx + 1))?;

            cell.trim().parse::<f64>().map_err(|err| {
                format!("cannot parse value '{cell}' in row {} column {column}: {err}", row_idx + 1).into()
            })
        })
        .collect()
}
