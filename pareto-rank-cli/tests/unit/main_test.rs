use crate::cli::{get_app, run_subcommand};
use pareto_rank_cli::extensions::rank::read_table;
use std::io::BufReader;

const RESULTS_PATH: &str = "tests/data/results.csv";

#[test]
fn can_run_rank_subcommand() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "pareto-rank",
        "rank",
        RESULTS_PATH,
        "--objectives",
        "MAE,E_specific,Cost,Emissions",
        "--out-result",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let table = read_table(BufReader::new(tmpfile.as_file()), b',').unwrap();
    assert_eq!(table.cell(0, 9), Some("rank"));
    assert_eq!(table.cell(5, 9), Some("3"));
}

#[test]
fn can_require_subcommand_arguments() {
    get_app().try_get_matches_from(vec!["pareto-rank", "rank"]).unwrap_err();
}
