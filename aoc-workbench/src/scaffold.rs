//! Scaffolding of per-day solution and test units

use crate::day::Day;
use crate::error::ScaffoldError;
use crate::layout::ProjectLayout;
use std::fs;
use std::path::{Path, PathBuf};

/// Files touched by [`scaffold_day`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub solution: PathBuf,
    pub test: PathBuf,
    /// False when the test unit already existed and was left alone
    pub test_created: bool,
}

/// Create the solution unit for `day`, and its test unit if absent
pub fn scaffold_day(layout: &ProjectLayout, day: Day) -> Result<ScaffoldReport, ScaffoldError> {
    let solution = layout.solution_path(day);
    if solution.exists() {
        return Err(ScaffoldError::SolutionExists(solution));
    }

    create_dir(&layout.days_dir())?;
    create_dir(&layout.tests_dir())?;
    write(&solution, &solution_template(day))?;

    let test = layout.test_path(day);
    let test_created = !test.exists();
    if test_created {
        write(&test, &test_template(day))?;
    }

    Ok(ScaffoldReport {
        solution,
        test,
        test_created,
    })
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn solution_template(day: Day) -> String {
    format!(
        r#"// Day {day} solution.

fn parse_input(raw) {{
    let text = raw;
    text.trim();
    text.split("\n").filter(|line| line != "")
}}

fn part1(input) {{
    // TODO: implement part 1
    input.len()
}}

fn part2(input) {{
    // TODO: implement part 2
    input.len()
}}
"#
    )
}

pub fn test_template(day: Day) -> String {
    let module = format!("days/day{}", day.padded());
    format!(
        r#"// Day {day} tests.

let example = `
`;

test_skip("day {day} part 1 example", || {{
    import "{module}" as solution;
    assert_eq(solution::part1(solution::parse_input(example)), "TODO");
}});

test_skip("day {day} part 2 example", || {{
    import "{module}" as solution;
    assert_eq(solution::part2(solution::parse_input(example)), "TODO");
}});

test_skip("day {day} part 1 answer", || {{
    import "{module}" as solution;
    assert_eq(solution::part1(solution::parse_input(read_input({day}))), "TODO");
}});

test_skip("day {day} part 2 answer", || {{
    import "{module}" as solution;
    assert_eq(solution::part2(solution::parse_input(read_input({day}))), "TODO");
}});
"#
    )
}
