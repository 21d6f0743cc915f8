//! Puzzle input source

use crate::day::Day;
use crate::error::InputError;
use crate::layout::ProjectLayout;
use std::fs;

/// Input file used when no name is given
pub const DEFAULT_INPUT: &str = "input.txt";
const INPUT_EXTENSION: &str = ".txt";

/// Provides the raw text of a day's input file
pub trait InputSource: Send + Sync {
    fn read(&self, day: Day, name: &str) -> Result<String, InputError>;
}

/// Normalize a requested input name so it always ends in `.txt`
pub fn normalize_input_name(name: Option<&str>) -> String {
    match name {
        None | Some("") => DEFAULT_INPUT.to_string(),
        Some(name) if name.ends_with(INPUT_EXTENSION) => name.to_string(),
        Some(name) => format!("{}{}", name, INPUT_EXTENSION),
    }
}

/// Reads inputs from `<root>/Day N/<name>`
#[derive(Debug, Clone)]
pub struct FsInputSource {
    layout: ProjectLayout,
}

impl FsInputSource {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl InputSource for FsInputSource {
    fn read(&self, day: Day, name: &str) -> Result<String, InputError> {
        let path = self
            .layout
            .input_dir(day)
            .join(normalize_input_name(Some(name)));
        let content = fs::read_to_string(&path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(content.replace("\r\n", "\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_input_name() {
        assert_eq!(normalize_input_name(None), "input.txt");
        assert_eq!(normalize_input_name(Some("")), "input.txt");
        assert_eq!(normalize_input_name(Some("example")), "example.txt");
        assert_eq!(normalize_input_name(Some("example.txt")), "example.txt");
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        let day = Day::new(2).unwrap();
        fs::create_dir_all(layout.input_dir(day)).unwrap();
        fs::write(layout.input_dir(day).join("example.txt"), "a\r\nb\r\n").unwrap();

        let source = FsInputSource::new(layout);
        assert_eq!(source.read(day, "example").unwrap(), "a\nb\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let source = FsInputSource::new(ProjectLayout::new(temp.path()));
        let result = source.read(Day::new(1).unwrap(), DEFAULT_INPUT);
        assert!(matches!(result, Err(InputError::Read { .. })));
    }
}
