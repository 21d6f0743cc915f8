//! Error types for the workbench library

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading a unit (solution or test script)
#[derive(Debug, Error)]
pub enum LoadError {
    /// The unit file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The unit failed to compile
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    /// Top-level code of the unit raised an error
    #[error("Failed to evaluate {}: {message}", .path.display())]
    Eval { path: PathBuf, message: String },
}

impl LoadError {
    /// Path of the unit that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Eval { path, .. } => path,
        }
    }
}

/// Error raised by a test action
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CaseError {
    message: String,
}

impl CaseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error type for day / part / input arguments and input lookup
#[derive(Debug, Error)]
pub enum InputError {
    /// Day outside of 1-25 or not an integer
    #[error("Day must be between 1 and 25. Received: {0}")]
    InvalidDay(String),
    /// Part is not 1, 2 or "all"
    #[error("Invalid part provided: {0}")]
    InvalidPart(String),
    /// Input file does not exist or cannot be read
    #[error("Failed to read input {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for a solution run
#[derive(Debug, Error)]
pub enum SolutionError {
    /// The solution unit failed to load
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The input could not be provided
    #[error(transparent)]
    Input(#[from] InputError),
    /// `parse_input` raised an error
    #[error("Day {day} parse_input failed: {message}")]
    Parse { day: u8, message: String },
    /// A part function raised an error
    #[error("Day {day} Part {part} failed: {message}")]
    Part { day: u8, part: u8, message: String },
}

/// Error type for the watch controller
#[derive(Debug, Error)]
pub enum WatchError {
    /// The platform watcher could not be created
    #[error("Failed to start file watcher: {0}")]
    Setup(#[from] notify::Error),
    /// None of the requested paths could be observed
    #[error("No watch targets could be observed")]
    NoTargets,
}

/// Error type for scaffolding a new day
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The solution unit is already present
    #[error("Solution file already exists: {}", .0.display())]
    SolutionExists(PathBuf),
    /// Writing a file or creating a directory failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
