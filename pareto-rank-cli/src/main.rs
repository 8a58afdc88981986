//! A command line interface to pareto front ranking engine.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::rank::{get_rank_app, run_rank};
    use clap::{ArgMatches, Command};
    use pareto_rank::prelude::GenericError;
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Pareto Front Ranking")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to pareto front ranking engine")
            .subcommand(get_rank_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("rank", rank_matches)) => run_rank(rank_matches, create_write_buffer),
            _ => Err(GenericError::from("no known subcommand specified. Use -h to print help information")),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
