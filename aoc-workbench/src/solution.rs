//! Solution runner: feeds a day's input to its part functions

use crate::day::{Day, Part, PartSelection};
use crate::error::SolutionError;
use crate::input::InputSource;
use crate::layout::ProjectLayout;
use crate::script::{ScriptHost, ScriptSolution};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// A loaded solution, independent of how it was loaded
pub trait SolutionUnit {
    /// Parsed input handed to each part
    type Input;

    /// Parse the raw input; units without a parser receive the raw text
    fn parse_input(&mut self, raw: &str) -> Result<Self::Input, SolutionError>;

    fn has_part(&self, part: Part) -> bool;

    fn solve(&mut self, part: Part, input: Self::Input) -> Result<String, SolutionError>;
}

/// Result of one requested part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOutcome {
    Solved {
        part: Part,
        answer: String,
        elapsed: Duration,
    },
    /// The unit does not define the part function
    Missing { part: Part },
}

/// Receives the outcome of each part as it completes
pub trait SolutionReporter {
    fn part_solved(&mut self, day: Day, part: Part, answer: &str, elapsed: Duration);
    fn part_missing(&mut self, day: Day, part: Part);
}

/// Runs the requested parts of one day against one input file
#[derive(Clone)]
pub struct SolutionRunner {
    layout: ProjectLayout,
    inputs: Arc<dyn InputSource>,
    day: Day,
    parts: PartSelection,
    input_name: String,
}

impl SolutionRunner {
    pub fn new(
        layout: ProjectLayout,
        inputs: Arc<dyn InputSource>,
        day: Day,
        parts: PartSelection,
        input_name: impl Into<String>,
    ) -> Self {
        Self {
            layout,
            inputs,
            day,
            parts,
            input_name: input_name.into(),
        }
    }

    pub fn solution_path(&self) -> PathBuf {
        self.layout.solution_path(self.day)
    }

    /// Load the solution unit fresh from disk and run it
    pub fn run<R>(&self, reporter: &mut R) -> Result<Vec<PartOutcome>, SolutionError>
    where
        R: SolutionReporter + ?Sized,
    {
        let host = ScriptHost::new(self.layout.clone(), Arc::clone(&self.inputs));
        let mut unit = ScriptSolution::load(&host, self.day, &self.solution_path())?;
        self.run_unit(&mut unit, reporter)
    }

    /// Run the requested parts of an already loaded unit
    ///
    /// A part the unit does not define is reported and skipped; a part that
    /// raises aborts the run.
    pub fn run_unit<U, R>(
        &self,
        unit: &mut U,
        reporter: &mut R,
    ) -> Result<Vec<PartOutcome>, SolutionError>
    where
        U: SolutionUnit + ?Sized,
        R: SolutionReporter + ?Sized,
    {
        let raw = self.inputs.read(self.day, &self.input_name)?;
        debug!(day = %self.day, input = %self.input_name, bytes = raw.len(), "input loaded");

        let mut outcomes = Vec::with_capacity(self.parts.parts().len());
        for &part in self.parts.parts() {
            if !unit.has_part(part) {
                reporter.part_missing(self.day, part);
                outcomes.push(PartOutcome::Missing { part });
                continue;
            }

            let input = unit.parse_input(&raw)?;
            let start = Instant::now();
            let answer = unit.solve(part, input)?;
            let elapsed = start.elapsed();
            reporter.part_solved(self.day, part, &answer, elapsed);
            outcomes.push(PartOutcome::Solved {
                part,
                answer,
                elapsed,
            });
        }
        Ok(outcomes)
    }
}
