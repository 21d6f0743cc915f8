//! Advent of Code Workbench Library
//!
//! A small workbench for solving Advent of Code puzzles with script units:
//! per-day solution scripts, per-day test scripts, a sequential test suite and
//! a watch loop that re-runs either of them when files change.
//!
//! # Overview
//!
//! This library provides:
//! - A test registry filled by loading a test unit, reset before every unit
//! - Case selection honouring `skip` and `only`
//! - A sequential suite executor with pass / fail / skip accounting
//! - A solution runner that times each part of a day
//! - A watch controller with debouncing and single-slot run coalescing
//!
//! # Quick Example
//!
//! ```
//! use aoc_workbench::{CaseError, TestRegistry, select};
//!
//! let mut registry = TestRegistry::new();
//! registry.test("adds", || Ok(()));
//! registry.test_skip("later", || Err(CaseError::new("not yet")));
//!
//! let snapshot = registry.snapshot();
//! let selection = select(&snapshot.cases, snapshot.has_only);
//! assert_eq!(selection.runnable.len(), 1);
//! assert_eq!(selection.skipped, 1);
//! ```
//!
//! # Key Concepts
//!
//! ## Units
//!
//! A unit is a Rhai script. Solution units define `part1`, `part2` and
//! optionally `parse_input`; test units call `test`, `test_skip` and
//! `test_only`. Units are read and evaluated from scratch on every load, see
//! [`script::ScriptHost`].
//!
//! ## Loading
//!
//! [`UnitLoader`] is the seam between the suite and the unit format. The
//! suite calls [`load_unit`], which resets the registry, evaluates the unit and
//! snapshots what it registered.
//!
//! ## Watch Mode
//!
//! [`watch::RunQueue`] serializes runs and coalesces triggers;
//! [`watch::WatchController`] feeds it debounced filesystem changes.

mod day;
mod error;
mod input;
mod layout;
mod loader;
mod registry;
mod selector;
mod solution;
mod suite;

pub mod scaffold;
pub mod script;
pub mod watch;

// Re-export public API
pub use day::{DAYS, Day, Part, PartSelection};
pub use error::{CaseError, InputError, LoadError, ScaffoldError, SolutionError, WatchError};
pub use input::{DEFAULT_INPUT, FsInputSource, InputSource, normalize_input_name};
pub use layout::{ProjectLayout, TEST_UNIT_SUFFIX, UNIT_EXTENSION};
pub use loader::{UnitLoader, load_unit};
pub use registry::{TestAction, TestCase, TestOptions, TestRegistry, TestSnapshot};
pub use selector::{Selection, select};
pub use solution::{PartOutcome, SolutionReporter, SolutionRunner, SolutionUnit};
pub use suite::{FailureDetail, RunResult, SuiteReporter, TestSuite, UnitSkip, discover_units};
