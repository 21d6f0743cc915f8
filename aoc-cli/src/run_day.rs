//! `aoc day`: run a day's solution, optionally re-running on change

use crate::config::Config;
use crate::error::CliError;
use crate::output::{self, ConsoleReporter};
use aoc_workbench::watch::{RunQueue, WatchController, WatchTrigger};
use aoc_workbench::{
    Day, FsInputSource, PartSelection, SolutionRunner, normalize_input_name,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::warn;

pub struct DayRequest {
    pub day: Day,
    pub parts: PartSelection,
    pub input: Option<String>,
    pub watch: bool,
}

pub fn run(config: &Config, request: DayRequest) -> Result<i32, CliError> {
    let layout = config.layout.clone();
    let runner = SolutionRunner::new(
        layout.clone(),
        Arc::new(FsInputSource::new(layout.clone())),
        request.day,
        request.parts,
        normalize_input_name(request.input.as_deref()),
    );

    let solution = runner.solution_path();
    if !solution.is_file() {
        return Err(CliError::Usage(format!(
            "Solution file not found: {}",
            layout.relative(&solution).display()
        )));
    }

    let status = Arc::new(AtomicI32::new(0));
    let quiet = config.quiet;
    let job_status = Arc::clone(&status);
    let queue = RunQueue::new(move |trigger: &WatchTrigger| {
        if !quiet {
            output::announce(trigger, "");
        }
        let mut reporter = ConsoleReporter::new(quiet);
        match runner.run(&mut reporter) {
            Ok(_) => {
                job_status.store(0, Ordering::SeqCst);
                Ok(())
            }
            Err(err) => {
                job_status.store(1, Ordering::SeqCst);
                Err(err.into())
            }
        }
    });

    queue.run_blocking(WatchTrigger::Initial);
    if !request.watch {
        return Ok(status.load(Ordering::SeqCst));
    }

    let watched = solution.clone();
    WatchController::new(queue, layout.root())
        .with_debounce(config.debounce)
        .with_filter(move |change| {
            if watched.exists() {
                return true;
            }
            warn!(
                "Solution file {} is missing; ignoring {}",
                watched.display(),
                change.label
            );
            false
        })
        .watch(&[solution])?;

    Ok(status.load(Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_workbench::{Part, ProjectLayout};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn project(solution: Option<&str>) -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        let day = Day::new(1).unwrap();
        if let Some(solution) = solution {
            fs::create_dir_all(layout.days_dir()).unwrap();
            fs::write(layout.solution_path(day), solution).unwrap();
        }
        fs::create_dir_all(layout.input_dir(day)).unwrap();
        fs::write(layout.input_dir(day).join("input.txt"), "1\n2\n").unwrap();

        let config = Config {
            layout,
            debounce: Duration::from_millis(20),
            quiet: true,
        };
        (temp, config)
    }

    fn request(parts: PartSelection) -> DayRequest {
        DayRequest {
            day: Day::new(1).unwrap(),
            parts,
            input: None,
            watch: false,
        }
    }

    #[test]
    fn test_missing_solution_is_a_usage_error() {
        let (_temp, config) = project(None);
        let err = run(&config, request(PartSelection::All)).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("days/day01.rhai"));
    }

    #[test]
    fn test_successful_run_exits_zero() {
        let (_temp, config) = project(Some("fn part1(input) { input.len() }"));
        assert_eq!(run(&config, request(PartSelection::All)).unwrap(), 0);
    }

    #[test]
    fn test_failed_run_exits_one() {
        let (_temp, config) = project(Some(r#"fn part1(input) { throw "not yet"; }"#));
        assert_eq!(
            run(&config, request(PartSelection::Only(Part::One))).unwrap(),
            1
        );
    }

    #[test]
    fn test_missing_input_exits_one() {
        let (_temp, config) = project(Some("fn part1(input) { 1 }"));
        let mut request = request(PartSelection::All);
        request.input = Some("example".to_string());
        assert_eq!(run(&config, request).unwrap(), 1);
    }
}
