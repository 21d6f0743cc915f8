//! CLI argument parsing using clap

use aoc_workbench::{Day, PartSelection};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code puzzle workbench
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Scaffold, run and test Advent of Code script solutions", version)]
pub struct Args {
    /// Project root holding days/, tests/, lib/ and the "Day N" input directories
    #[arg(long, global = true, env = "AOC_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Quiet period in milliseconds before a burst of changes triggers a re-run
    #[arg(long, global = true, default_value_t = 75)]
    pub debounce_ms: u64,

    /// Quiet mode - only answers, failures and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the solution unit (and test unit, if absent) for a day
    New {
        /// Day between 1 and 25
        day: Day,
    },

    /// Run a day's solution against an input file
    Day {
        /// Day between 1 and 25
        day: Day,

        /// Part to run: 1, 2 or "all"
        #[arg(default_value = "all")]
        part: PartSelection,

        /// Input file in the day's directory; ".txt" is appended if missing
        input: Option<String>,

        /// Re-run when the solution file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Run the test units
    Test {
        /// Test units to run instead of everything under tests/
        files: Vec<PathBuf>,

        /// Re-run when tests, solutions or shared modules change
        #[arg(short, long)]
        watch: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_workbench::Part;
    use proptest::prelude::*;

    #[test]
    fn test_day_command_defaults() {
        let args = Args::try_parse_from(["aoc", "day", "3"]).unwrap();
        match args.command {
            Command::Day {
                day,
                part,
                input,
                watch,
            } => {
                assert_eq!(day.get(), 3);
                assert_eq!(part, PartSelection::All);
                assert_eq!(input, None);
                assert!(!watch);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.debounce_ms, 75);
    }

    #[test]
    fn test_day_command_with_part_input_and_watch() {
        let args = Args::try_parse_from(["aoc", "day", "07", "2", "example", "-w"]).unwrap();
        match args.command {
            Command::Day {
                day,
                part,
                input,
                watch,
            } => {
                assert_eq!(day.get(), 7);
                assert_eq!(part, PartSelection::Only(Part::Two));
                assert_eq!(input.as_deref(), Some("example"));
                assert!(watch);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_arguments_are_rejected() {
        assert!(Args::try_parse_from(["aoc", "day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "day", "1", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "new"]).is_err());
    }

    #[test]
    fn test_test_command_files() {
        let args =
            Args::try_parse_from(["aoc", "test", "tests/a.test.rhai", "--watch", "-q"]).unwrap();
        assert!(args.quiet);
        match args.command {
            Command::Test { files, watch } => {
                assert_eq!(files, vec![PathBuf::from("tests/a.test.rhai")]);
                assert!(watch);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_new_accepts_exactly_days_1_to_25(n in 0u32..60) {
            let parsed = Args::try_parse_from(["aoc", "new", &n.to_string()]);
            prop_assert_eq!(parsed.is_ok(), (1..=25).contains(&n));
        }
    }
}
