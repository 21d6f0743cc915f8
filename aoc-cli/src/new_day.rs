//! `aoc new`: scaffold a day's solution and test units

use crate::config::Config;
use crate::error::CliError;
use aoc_workbench::Day;
use aoc_workbench::scaffold::scaffold_day;

pub fn run(config: &Config, day: Day) -> Result<i32, CliError> {
    let report = scaffold_day(&config.layout, day)?;
    let layout = &config.layout;

    println!("Created {}", layout.relative(&report.solution).display());
    if report.test_created {
        println!("Created {}", layout.relative(&report.test).display());
    } else {
        println!(
            "Test file already exists: {}",
            layout.relative(&report.test).display()
        );
    }
    Ok(0)
}
