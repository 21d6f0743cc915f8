//! Sequential test suite executor

use crate::error::{CaseError, LoadError};
use crate::layout::{ProjectLayout, TEST_UNIT_SUFFIX};
use crate::loader::{UnitLoader, load_unit};
use crate::registry::TestRegistry;
use crate::selector::select;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Why a unit contributed no executed cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSkip {
    /// The unit registered nothing
    NoTests,
    /// Everything the unit registered was skipped
    NoRunnableTests,
}

/// A failed case (or unit load) with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    pub label: String,
    pub error: String,
}

/// Counts of one suite run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failures: Vec<FailureDetail>,
    pub total_units: usize,
}

impl RunResult {
    /// Process exit status for a non-watch run
    pub fn exit_code(&self) -> i32 {
        i32::from(self.failed > 0)
    }

    /// `<passed> passed, <failed> failed, <skipped> skipped`
    pub fn summary_line(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped",
            self.passed, self.failed, self.skipped
        )
    }
}

/// Receives progress of a suite run
pub trait SuiteReporter {
    fn no_units(&mut self);
    fn unit_skipped(&mut self, unit: &Path, reason: UnitSkip);
    fn unit_load_failed(&mut self, label: &str, error: &LoadError);
    fn case_passed(&mut self, label: &str, elapsed: Duration);
    fn case_failed(&mut self, label: &str, error: &CaseError);
    fn summary(&mut self, result: &RunResult);
}

/// Collect every test unit below `dir`, sorted by path
pub fn discover_units(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(TEST_UNIT_SUFFIX))
        })
        .map(walkdir::DirEntry::into_path)
        .sorted()
        .collect()
}

/// One configured suite: either explicit units or everything under the tests dir
#[derive(Debug, Clone)]
pub struct TestSuite {
    layout: ProjectLayout,
    explicit: Option<Vec<PathBuf>>,
}

impl TestSuite {
    pub fn new(layout: ProjectLayout, explicit: Option<Vec<PathBuf>>) -> Self {
        Self { layout, explicit }
    }

    /// Units of this run, in execution order
    pub fn units(&self) -> Vec<PathBuf> {
        match &self.explicit {
            Some(files) => files.clone(),
            None => discover_units(&self.layout.tests_dir()),
        }
    }

    /// Load and run every unit, one case at a time
    ///
    /// A failing case or a unit that fails to load is recorded and the run
    /// carries on with the next one.
    pub fn run<L, R>(&self, loader: &L, reporter: &mut R) -> RunResult
    where
        L: UnitLoader + ?Sized,
        R: SuiteReporter + ?Sized,
    {
        let units = self.units();
        let mut result = RunResult {
            total_units: units.len(),
            ..RunResult::default()
        };

        if units.is_empty() {
            reporter.no_units();
            return result;
        }

        let mut registry = TestRegistry::new();
        for unit in &units {
            let relative = self.layout.relative(unit);

            let snapshot = match load_unit(loader, unit, &mut registry) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    let label = format!("{} › <load>", relative.display());
                    reporter.unit_load_failed(&label, &err);
                    result.failed += 1;
                    result.failures.push(FailureDetail {
                        label,
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            if snapshot.cases.is_empty() {
                reporter.unit_skipped(relative, UnitSkip::NoTests);
                continue;
            }

            let selection = select(&snapshot.cases, snapshot.has_only);
            result.skipped += selection.skipped;
            if selection.runnable.is_empty() {
                reporter.unit_skipped(relative, UnitSkip::NoRunnableTests);
                continue;
            }

            for case in &selection.runnable {
                let label = format!("{} › {}", relative.display(), case.name());
                let start = Instant::now();
                match case.run() {
                    Ok(()) => {
                        result.passed += 1;
                        reporter.case_passed(&label, start.elapsed());
                    }
                    Err(err) => {
                        result.failed += 1;
                        reporter.case_failed(&label, &err);
                        result.failures.push(FailureDetail {
                            label,
                            error: err.to_string(),
                        });
                    }
                }
            }
        }

        debug!(summary = %result.summary_line(), units = result.total_units, "suite finished");
        reporter.summary(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_units_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let tests = temp.path().join("tests");
        std::fs::create_dir_all(tests.join("nested")).unwrap();
        std::fs::write(tests.join("day02.test.rhai"), "").unwrap();
        std::fs::write(tests.join("day01.test.rhai"), "").unwrap();
        std::fs::write(tests.join("nested/day03.test.rhai"), "").unwrap();
        std::fs::write(tests.join("helpers.rhai"), "").unwrap();
        std::fs::write(tests.join("notes.txt"), "").unwrap();

        let units = discover_units(&tests);
        assert_eq!(
            units,
            vec![
                tests.join("day01.test.rhai"),
                tests.join("day02.test.rhai"),
                tests.join("nested/day03.test.rhai"),
            ]
        );
    }

    #[test]
    fn test_discover_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(discover_units(&temp.path().join("tests")).is_empty());
    }

    #[test]
    fn test_exit_code() {
        let mut result = RunResult::default();
        assert_eq!(result.exit_code(), 0);
        result.failed = 3;
        assert_eq!(result.exit_code(), 1);
        assert_eq!(result.summary_line(), "0 passed, 3 failed, 0 skipped");
    }
}
