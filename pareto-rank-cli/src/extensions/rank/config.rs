//! Ranking configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/rank/config_test.rs"]
mod config_test;

use pareto_rank::utils::GenericResult;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::io::{BufReader, Read};

/// A ranking configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies how objective values are read from the table and where ranks are written.
    pub table: Option<TableConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// A table layout configuration. All fields are optional: defaults are applied by
/// `create_table_layout`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// A field delimiter. Default is `,`.
    pub delimiter: Option<char>,
    /// Amount of leading rows copied as they are, the last one provides column names. Default is 1.
    pub header_rows: Option<usize>,
    /// Columns with minimized objective values.
    pub objectives: Option<Vec<ColumnRef>>,
    /// A window of rows to rank. Default is all rows after header.
    pub rows: Option<RowWindow>,
    /// A column which receives ranks. Default is `rank`.
    pub rank_column: Option<ColumnRef>,
    /// Specifies what to do with rows which have no valid objective values. Default is `fail`.
    pub invalid_rows: Option<InvalidRowPolicy>,
}

/// An environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Amount of files ranked in parallel. Default is amount of logical cpus.
    pub parallelism: Option<usize>,
    /// Enables information messages. Default is false.
    pub logging: Option<bool>,
}

/// References a table column either by zero-based position or by name from the header.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// A zero-based column index.
    Index(usize),
    /// A column name as it is specified in the last header row.
    Name(String),
}

/// A window of rows specified by one-based inclusive row numbers, as they are seen in spreadsheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RowWindow {
    /// The first row to rank.
    pub first: Option<usize>,
    /// The last row to rank.
    pub last: Option<usize>,
}

/// Specifies how rows with missing, malformed or non-finite objective values are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRowPolicy {
    /// Stops ranking of the table with an error.
    #[default]
    Fail,
    /// Excludes such rows from ranking, their rank cell is left empty.
    Skip,
}

/// A resolved table layout with all defaults applied.
#[derive(Clone, Debug)]
pub struct TableLayout {
    /// A field delimiter.
    pub delimiter: u8,
    /// Amount of header rows.
    pub header_rows: usize,
    /// Objective columns.
    pub objectives: Vec<ColumnRef>,
    /// A window of rows to rank.
    pub rows: RowWindow,
    /// A rank column.
    pub rank_column: ColumnRef,
    /// An invalid row policy.
    pub invalid_rows: InvalidRowPolicy,
}

impl From<&str> for ColumnRef {
    fn from(value: &str) -> Self {
        value.trim().parse::<usize>().map_or_else(|_| ColumnRef::Name(value.trim().to_string()), ColumnRef::Index)
    }
}

impl Display for ColumnRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRef::Index(index) => write!(f, "#{index}"),
            ColumnRef::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl RowWindow {
    fn merge(self, other: RowWindow) -> Self {
        Self { first: other.first.or(self.first), last: other.last.or(self.last) }
    }
}

impl TableConfig {
    /// Merges two configurations: values specified in `other` take precedence.
    pub fn merge(self, other: TableConfig) -> Self {
        let rows = match (self.rows, other.rows) {
            (Some(rows), Some(other)) => Some(rows.merge(other)),
            (rows, other) => other.or(rows),
        };

        Self {
            delimiter: other.delimiter.or(self.delimiter),
            header_rows: other.header_rows.or(self.header_rows),
            objectives: other.objectives.or(self.objectives),
            rows,
            rank_column: other.rank_column.or(self.rank_column),
            invalid_rows: other.invalid_rows.or(self.invalid_rows),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Validates table configuration and creates a table layout from it.
pub fn create_table_layout(config: &TableConfig) -> GenericResult<TableLayout> {
    let delimiter = match config.delimiter.unwrap_or(',') {
        delimiter if delimiter.is_ascii() => delimiter as u8,
        delimiter => return Err(format!("delimiter should be an ascii character, got: '{delimiter}'").into()),
    };

    let objectives = match config.objectives.as_ref() {
        Some(objectives) if !objectives.is_empty() => objectives.clone(),
        _ => return Err("objective columns are not specified".into()),
    };

    let mut unique = FxHashSet::default();
    if let Some(duplicate) = objectives.iter().find(|column| !unique.insert(*column)) {
        return Err(format!("objective column {duplicate} is specified more than once").into());
    }

    let rank_column = config.rank_column.clone().unwrap_or_else(|| ColumnRef::Name("rank".to_string()));
    if objectives.contains(&rank_column) {
        return Err(format!("rank column {rank_column} cannot be an objective column").into());
    }

    let rows = config.rows.unwrap_or_default();
    match (rows.first, rows.last) {
        (Some(0), _) | (_, Some(0)) => return Err("row numbers start from 1".into()),
        (Some(first), Some(last)) if first > last => {
            return Err(format!("the first row {first} is after the last row {last}").into());
        }
        _ => {}
    }

    Ok(TableLayout {
        delimiter,
        header_rows: config.header_rows.unwrap_or(1),
        objectives,
        rows,
        rank_column,
        invalid_rows: config.invalid_rows.unwrap_or_default(),
    })
}
