//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_workbench::ProjectLayout;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved runtime configuration
pub struct Config {
    /// Project layout rooted at the absolute project root
    pub layout: ProjectLayout,
    /// Debounce window of the watch loop
    pub debounce: Duration,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, resolving the project root
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let root = std::path::absolute(expand_tilde(&args.root))?;
        if !root.is_dir() {
            return Err(CliError::Config(format!(
                "Project root {} is not a directory",
                root.display()
            )));
        }

        Ok(Config {
            layout: ProjectLayout::new(root),
            debounce: Duration::from_millis(args.debounce_ms),
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Resolve explicit file arguments against the working directory
pub fn resolve_files(files: &[PathBuf]) -> Result<Option<Vec<PathBuf>>, CliError> {
    if files.is_empty() {
        return Ok(None);
    }
    files
        .iter()
        .map(|file| std::path::absolute(expand_tilde(file)).map_err(CliError::from))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn args(root: &Path) -> Args {
        let mut argv = vec![OsString::from("aoc"), OsString::from("--root")];
        argv.push(root.as_os_str().to_owned());
        argv.extend(["--debounce-ms", "20", "test"].map(OsString::from));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_args_resolves_root() {
        let temp = TempDir::new().unwrap();
        let config = Config::from_args(&args(temp.path())).unwrap();
        assert_eq!(config.layout.root(), temp.path());
        assert_eq!(config.debounce, Duration::from_millis(20));
        assert!(!config.quiet);
    }

    #[test]
    fn test_from_args_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = Config::from_args(&args(&temp.path().join("nope"))).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_expand_tilde() {
        let plain = Path::new("puzzles");
        assert_eq!(expand_tilde(plain), PathBuf::from("puzzles"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    #[test]
    fn test_resolve_files() {
        assert_eq!(resolve_files(&[]).unwrap(), None);

        let resolved = resolve_files(&[PathBuf::from("tests/day01.test.rhai")])
            .unwrap()
            .unwrap();
        assert!(resolved[0].is_absolute());
        assert!(resolved[0].ends_with("tests/day01.test.rhai"));
    }
}
