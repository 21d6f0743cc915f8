//! Console output for suite runs, solution runs and watch announcements

use aoc_workbench::watch::WatchTrigger;
use aoc_workbench::{
    CaseError, Day, LoadError, Part, RunResult, SolutionReporter, SuiteReporter, UnitSkip,
};
use std::path::Path;
use std::time::Duration;

/// Prints progress to stdout and failures to stderr
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl SuiteReporter for ConsoleReporter {
    fn no_units(&mut self) {
        eprintln!("No tests found.");
    }

    fn unit_skipped(&mut self, unit: &Path, reason: UnitSkip) {
        if self.quiet {
            return;
        }
        let why = match reason {
            UnitSkip::NoTests => "no tests registered",
            UnitSkip::NoRunnableTests => "no runnable tests",
        };
        eprintln!("[skip] {} ({})", unit.display(), why);
    }

    fn unit_load_failed(&mut self, label: &str, error: &LoadError) {
        eprintln!("✗ {}", label);
        eprintln!("{}", error);
    }

    fn case_passed(&mut self, label: &str, elapsed: Duration) {
        if !self.quiet {
            println!("✓ {} ({})", label, format_duration(elapsed));
        }
    }

    fn case_failed(&mut self, label: &str, error: &CaseError) {
        eprintln!("✗ {}", label);
        eprintln!("{}", error);
    }

    fn summary(&mut self, result: &RunResult) {
        if result.failed > 0 {
            eprintln!("\n{}", result.summary_line());
        } else {
            println!("\n{}", result.summary_line());
        }
    }
}

impl SolutionReporter for ConsoleReporter {
    fn part_solved(&mut self, day: Day, part: Part, answer: &str, elapsed: Duration) {
        if self.quiet {
            println!("{}", answer);
        } else {
            println!("Day {} Part {}: {} ({})", day, part, answer, format_duration(elapsed));
        }
    }

    fn part_missing(&mut self, day: Day, part: Part) {
        eprintln!("Part {} is not implemented for day {}.", part, day);
    }
}

/// Print the re-run line for a watch trigger; the initial run prints nothing
pub fn announce(trigger: &WatchTrigger, what: &str) {
    let Some(label) = trigger.label() else {
        return;
    };
    match trigger {
        WatchTrigger::Change { at, .. } => println!(
            "{} [watch] Change detected ({}). Re-running{}...",
            at.format("%H:%M:%S"),
            label,
            what
        ),
        _ => println!("[watch] Change detected ({}). Re-running{}...", label, what),
    }
}

/// Format a duration in milliseconds with two decimals
fn format_duration(d: Duration) -> String {
    format!("{:.2}ms", d.as_secs_f64() * 1000.0)
}
