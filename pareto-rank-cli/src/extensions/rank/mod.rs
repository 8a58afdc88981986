//! Rank command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/rank/rank_test.rs"]
mod rank_test;

mod config;
pub use self::config::*;

mod summary;
pub use self::summary::*;

mod table;
pub use self::table::*;

use pareto_rank::prelude::*;
use std::io::{Read, Write};

/// Ranks rows of the table according to the layout and writes ranks into the table.
pub fn rank_table(table: &mut Table, layout: &TableLayout, logger: &InfoLogger) -> GenericResult<RankSummary> {
    let selection = select_objectives(table, layout, logger)?;
    let ranks = rank_matrix(&selection.matrix);

    merge_ranks(table, layout, &selection, &ranks)?;

    Ok(RankSummary::new(&ranks, selection.skipped.len()))
}

/// Reads a table from the reader, ranks it and writes the result table into the writer.
pub fn rank_csv<R: Read, W: Write>(
    reader: R,
    writer: W,
    layout: &TableLayout,
    logger: &InfoLogger,
) -> GenericResult<RankSummary> {
    let mut table = read_table(reader, layout.delimiter)?;
    let summary = rank_table(&mut table, layout, logger)?;

    write_table(writer, &table, layout.delimiter)?;

    Ok(summary)
}
