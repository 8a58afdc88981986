use pareto_rank::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Describes results of ranking a single table.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSummary {
    /// A source of the table, typically a file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Amount of rows within the ranking window.
    pub rows: usize,
    /// Amount of ranked rows.
    pub ranked: usize,
    /// Amount of rows excluded from ranking.
    pub skipped: usize,
    /// Amount of rows in each front, the first element is the best front.
    pub fronts: Vec<usize>,
}

impl RankSummary {
    /// Creates a new instance of `RankSummary` from ranks assigned to rows.
    pub fn new(ranks: &[Rank], skipped: usize) -> Self {
        Self { source: None, rows: ranks.len() + skipped, ranked: ranks.len(), skipped, fronts: get_front_sizes(ranks) }
    }

    /// Sets the source of the table.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

/// Writes summaries as a json array.
pub fn write_summaries<W: Write>(writer: W, summaries: &[RankSummary]) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, summaries).map_err(|err| format!("cannot write summary: '{err}'").into())
}
