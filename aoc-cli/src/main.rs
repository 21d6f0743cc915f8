//! AOC CLI - scaffold, run and test Advent of Code script solutions

mod cli;
mod config;
mod error;
mod new_day;
mod output;
mod run_day;

use clap::{CommandFactory, Parser};
use cli::{Args, Command};
use config::Config;
use error::CliError;
use run_day::DayRequest;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_usage() {
                eprintln!();
                eprintln!("{}", Args::command().render_usage());
            }
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32, CliError> {
    let config = Config::from_args(&args)?;

    match args.command {
        Command::New { day } => new_day::run(&config, day),
        Command::Day {
            day,
            part,
            input,
            watch,
        } => run_day::run(
            &config,
            DayRequest {
                day,
                parts: part,
                input,
                watch,
            },
        ),
        Command::Test { files, watch } => run_tests::run(&config, &files, watch),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8, quiet: bool) {
    let default = match verbose {
        0 if quiet => "aoc_workbench=warn,aoc_cli=warn",
        0 => "aoc_workbench=info,aoc_cli=info",
        1 => "aoc_workbench=debug,aoc_cli=debug",
        _ => "aoc_workbench=trace,aoc_cli=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
