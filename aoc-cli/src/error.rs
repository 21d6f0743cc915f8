//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid or missing argument
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scaffolding error
    #[error(transparent)]
    Scaffold(#[from] aoc_workbench::ScaffoldError),

    /// Solution run error
    #[error(transparent)]
    Solution(#[from] aoc_workbench::SolutionError),

    /// Watch setup error
    #[error(transparent)]
    Watch(#[from] aoc_workbench::WatchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Usage errors print a synopsis after the message
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::Usage(_) | CliError::Scaffold(aoc_workbench::ScaffoldError::SolutionExists(_))
        )
    }
}
