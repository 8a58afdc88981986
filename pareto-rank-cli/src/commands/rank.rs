#[cfg(test)]
#[path = "../../tests/unit/commands/rank_test.rs"]
mod rank_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use pareto_rank::prelude::*;
use pareto_rank::utils::{ThreadPool, Timer, get_cpus, parallel_collect};
use pareto_rank_cli::extensions::rank::*;
use rustc_hash::FxHashMap;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const INPUT_ARG_NAME: &str = "INPUT";
const CONFIG_ARG_NAME: &str = "config";
const OBJECTIVES_ARG_NAME: &str = "objectives";
const HEADER_ROWS_ARG_NAME: &str = "header-rows";
const FIRST_ROW_ARG_NAME: &str = "first-row";
const LAST_ROW_ARG_NAME: &str = "last-row";
const RANK_COLUMN_ARG_NAME: &str = "rank-column";
const DELIMITER_ARG_NAME: &str = "delimiter";
const SKIP_INVALID_ARG_NAME: &str = "skip-invalid";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_DIR_ARG_NAME: &str = "out-dir";
const IN_PLACE_ARG_NAME: &str = "in-place";
const SUMMARY_ARG_NAME: &str = "summary";
const PARALLELISM_ARG_NAME: &str = "parallelism";
const LOG_ARG_NAME: &str = "log";

type OutWriterFn = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

/// Specifies where a ranked table is written.
#[derive(Clone, Debug, PartialEq)]
enum RankOutput {
    Stdout,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
struct RankJob {
    input: PathBuf,
    output: RankOutput,
}

pub fn get_rank_app() -> Command {
    Command::new("rank")
        .about("Assigns pareto front ranks to rows of result tables")
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input files with objective values in delimited text format")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json file with table layout and environment configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OBJECTIVES_ARG_NAME)
                .help("Specifies comma separated objective columns: zero-based indices or header names")
                .short('j')
                .long(OBJECTIVES_ARG_NAME)
                .value_delimiter(',')
                .required(false),
        )
        .arg(
            Arg::new(HEADER_ROWS_ARG_NAME)
                .help("Specifies amount of header rows, the last one provides column names. Default is 1")
                .long(HEADER_ROWS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FIRST_ROW_ARG_NAME)
                .help("Specifies the first row (one-based, inclusive) to rank")
                .long(FIRST_ROW_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LAST_ROW_ARG_NAME)
                .help("Specifies the last row (one-based, inclusive) to rank")
                .long(LAST_ROW_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANK_COLUMN_ARG_NAME)
                .help("Specifies rank column: zero-based index or header name. Default is 'rank'")
                .short('r')
                .long(RANK_COLUMN_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DELIMITER_ARG_NAME)
                .help("Specifies a field delimiter. Default is ','")
                .short('d')
                .long(DELIMITER_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SKIP_INVALID_ARG_NAME)
                .help("Excludes rows with malformed objective values from ranking instead of failing")
                .long(SKIP_INVALID_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output, only for a single input")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .conflicts_with_all([OUT_DIR_ARG_NAME, IN_PLACE_ARG_NAME])
                .required(false),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies directory where result files are written with the same names as inputs")
                .long(OUT_DIR_ARG_NAME)
                .conflicts_with(IN_PLACE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(IN_PLACE_ARG_NAME)
                .help("Overwrites input files with ranked tables")
                .long(IN_PLACE_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(SUMMARY_ARG_NAME)
                .help("Specifies path to file for json summary of fronts")
                .short('s')
                .long(SUMMARY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLELISM_ARG_NAME)
                .help("Specifies amount of files ranked in parallel. Default is amount of logical cpus")
                .short('p')
                .long(PARALLELISM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether information messages should be printed to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_rank(matches: &ArgMatches, out_writer_func: OutWriterFn) -> GenericResult<()> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()
        .map_err(|err| err.context("cannot read config"))?
        .unwrap_or_default();

    let table_config = config.table.unwrap_or_default().merge(get_table_config(matches)?);
    let layout = create_table_layout(&table_config)?;
    let environment = get_environment(matches, config.environment.unwrap_or_default())?;

    let inputs: Vec<String> =
        matches.get_many::<String>(INPUT_ARG_NAME).map(|paths| paths.cloned().collect()).unwrap_or_default();
    let jobs = get_rank_jobs(
        inputs,
        matches.get_one::<String>(OUT_RESULT_ARG_NAME),
        matches.get_one::<String>(OUT_DIR_ARG_NAME),
        matches.get_flag(IN_PLACE_ARG_NAME),
    )?;

    let logger = environment.logger.clone();
    let results = ThreadPool::new(environment.parallelism)?
        .execute(|| parallel_collect(&jobs, |job| run_rank_job(job, &layout, &logger, out_writer_func)));

    let (summaries, errors): (Vec<_>, Vec<_>) = jobs.iter().zip(results).partition(|(_, result)| result.is_ok());
    let summaries = summaries.into_iter().filter_map(|(_, result)| result.ok()).collect::<Vec<_>>();

    errors.iter().for_each(|(job, result)| {
        if let Err(err) = result {
            eprintln!("cannot rank '{}': {err}", job.input.display());
        }
    });

    if let Some(path) = matches.get_one::<String>(SUMMARY_ARG_NAME) {
        write_summaries(create_write_buffer(Some(create_file(path, "summary")?)), summaries.as_slice())?;
    }

    if errors.is_empty() { Ok(()) } else { Err(format!("{} of {} inputs failed", errors.len(), jobs.len()).into()) }
}

fn get_table_config(matches: &ArgMatches) -> GenericResult<TableConfig> {
    let delimiter = matches
        .get_one::<String>(DELIMITER_ARG_NAME)
        .map(|delimiter| {
            let mut chars = delimiter.chars();
            match (chars.next(), chars.next()) {
                (Some(delimiter), None) => Ok(delimiter),
                _ => Err(GenericError::from(format!("delimiter should be a single character: '{delimiter}'"))),
            }
        })
        .transpose()?;

    let first = parse_int_value::<usize>(matches, FIRST_ROW_ARG_NAME, "first row")?;
    let last = parse_int_value::<usize>(matches, LAST_ROW_ARG_NAME, "last row")?;

    Ok(TableConfig {
        delimiter,
        header_rows: parse_int_value::<usize>(matches, HEADER_ROWS_ARG_NAME, "header rows")?,
        objectives: matches
            .get_many::<String>(OBJECTIVES_ARG_NAME)
            .map(|columns| columns.map(|column| ColumnRef::from(column.as_str())).collect()),
        rows: if first.is_some() || last.is_some() { Some(RowWindow { first, last }) } else { None },
        rank_column: matches.get_one::<String>(RANK_COLUMN_ARG_NAME).map(|column| ColumnRef::from(column.as_str())),
        invalid_rows: matches.get_flag(SKIP_INVALID_ARG_NAME).then_some(InvalidRowPolicy::Skip),
    })
}

fn get_environment(matches: &ArgMatches, config: EnvironmentConfig) -> GenericResult<Environment> {
    let parallelism = parse_int_value::<usize>(matches, PARALLELISM_ARG_NAME, "parallelism")?
        .or(config.parallelism)
        .unwrap_or_else(get_cpus);
    let is_logging = matches.get_flag(LOG_ARG_NAME) || config.logging.unwrap_or(false);

    Ok(if is_logging {
        Environment::new(Arc::new(|msg| eprintln!("{msg}")), parallelism)
    } else {
        Environment::silent(parallelism)
    })
}

fn get_rank_jobs(
    inputs: Vec<String>,
    out_result: Option<&String>,
    out_dir: Option<&String>,
    is_in_place: bool,
) -> GenericResult<Vec<RankJob>> {
    let jobs: GenericResult<Vec<RankJob>> = match (inputs.len(), out_result, out_dir, is_in_place) {
        (0, _, _, _) => Err("no input files specified".into()),
        (1, Some(out_result), _, _) => {
            Ok(vec![RankJob { input: PathBuf::from(&inputs[0]), output: RankOutput::File(PathBuf::from(out_result)) }])
        }
        (_, Some(_), _, _) => Err("out result can be specified only for a single input, use out dir instead".into()),
        (_, None, Some(out_dir), _) => inputs
            .iter()
            .map(|input| -> GenericResult<RankJob> {
                let file_name = Path::new(input)
                    .file_name()
                    .ok_or_else(|| GenericError::from(format!("cannot get file name of '{input}'")))?;

                let output = RankOutput::File(Path::new(out_dir).join(file_name));

                Ok(RankJob { input: PathBuf::from(input), output })
            })
            .collect(),
        (_, None, None, true) => Ok(inputs
            .iter()
            .map(|input| RankJob { input: PathBuf::from(input), output: RankOutput::File(PathBuf::from(input)) })
            .collect()),
        (1, None, None, false) => Ok(vec![RankJob { input: PathBuf::from(&inputs[0]), output: RankOutput::Stdout }]),
        _ => Err("multiple inputs require either out dir or in place option".into()),
    };

    jobs.and_then(|jobs| check_output_collisions(&jobs).map(|_| jobs))
}

/// Ensures that no two jobs write into the same file, jobs run in parallel.
fn check_output_collisions(jobs: &[RankJob]) -> GenericResult<()> {
    let mut outputs: FxHashMap<&Path, &Path> = FxHashMap::default();

    jobs.iter().try_for_each(|job| match &job.output {
        RankOutput::File(output) => match outputs.insert(output.as_path(), job.input.as_path()) {
            Some(other) => Err(format!(
                "inputs '{}' and '{}' have the same output file '{}'",
                other.display(),
                job.input.display(),
                output.display()
            )
            .into()),
            None => Ok(()),
        },
        RankOutput::Stdout => Ok(()),
    })
}

fn run_rank_job(
    job: &RankJob,
    layout: &TableLayout,
    logger: &InfoLogger,
    out_writer_func: OutWriterFn,
) -> GenericResult<RankSummary> {
    let timer = Timer::start();
    let input = job.input.to_string_lossy();

    // the whole table is read before the output is created, so input can be safely overwritten
    let mut table = read_table(BufReader::new(open_file(&input, "input")?), layout.delimiter)?;
    let summary = rank_table(&mut table, layout, logger)?.with_source(&input);

    let writer = match &job.output {
        RankOutput::Stdout => out_writer_func(None),
        RankOutput::File(path) => out_writer_func(Some(create_file(&path.to_string_lossy(), "out result")?)),
    };
    write_table(writer, &table, layout.delimiter)?;

    (logger)(&format!(
        "'{input}': ranked {} of {} rows into {} fronts in {}ms",
        summary.ranked,
        summary.rows,
        summary.fronts.len(),
        timer.elapsed_millis()
    ));

    Ok(summary)
}
