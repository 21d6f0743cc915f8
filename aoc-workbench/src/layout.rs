//! On-disk layout of a puzzle project

use crate::day::Day;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// File extension of script units
pub const UNIT_EXTENSION: &str = "rhai";
/// File name suffix of test units
pub const TEST_UNIT_SUFFIX: &str = ".test.rhai";

/// Paths of a puzzle project rooted at `root`
///
/// ```text
/// <root>/days/day01.rhai        solution units
/// <root>/tests/day01.test.rhai  test units
/// <root>/lib/                   shared script modules
/// <root>/Day 1/input.txt        inputs
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn days_dir(&self) -> PathBuf {
        self.root.join("days")
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root.join("tests")
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("lib")
    }

    pub fn solution_path(&self, day: Day) -> PathBuf {
        self.days_dir()
            .join(format!("day{}.{}", day.padded(), UNIT_EXTENSION))
    }

    pub fn test_path(&self, day: Day) -> PathBuf {
        self.tests_dir()
            .join(format!("day{}{}", day.padded(), TEST_UNIT_SUFFIX))
    }

    /// Directory holding the input files of a day
    pub fn input_dir(&self, day: Day) -> PathBuf {
        self.root.join(format!("Day {}", day))
    }

    /// Path relative to the project root, or the path itself when outside it
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Paths observed by the test watch loop, existing ones only
    ///
    /// Explicit files and their parent directories come first, followed by the
    /// tests, days and lib directories.
    pub fn test_watch_targets(&self, explicit: Option<&[PathBuf]>) -> Vec<PathBuf> {
        let explicit_targets = explicit
            .unwrap_or_default()
            .iter()
            .flat_map(|file| {
                let parent = file.parent().map(Path::to_path_buf);
                std::iter::once(file.clone()).chain(parent)
            });

        explicit_targets
            .chain([self.tests_dir(), self.days_dir(), self.lib_dir()])
            .unique()
            .filter(|target| target.exists())
            .collect()
    }
}
