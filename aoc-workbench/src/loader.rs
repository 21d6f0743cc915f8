//! Test unit loading

use crate::error::LoadError;
use crate::registry::{TestRegistry, TestSnapshot};
use std::path::Path;
use tracing::debug;

/// Evaluates one test unit, registering its cases
///
/// Implementations must evaluate the unit from scratch on every call so that
/// edits made between watch-mode runs are picked up.
pub trait UnitLoader {
    fn evaluate(&self, path: &Path, registry: &mut TestRegistry) -> Result<(), LoadError>;
}

/// Reset the registry, evaluate the unit and return what it registered
pub fn load_unit<L>(
    loader: &L,
    path: &Path,
    registry: &mut TestRegistry,
) -> Result<TestSnapshot, LoadError>
where
    L: UnitLoader + ?Sized,
{
    registry.reset();
    debug!(unit = %path.display(), "loading test unit");
    loader.evaluate(path, registry)?;
    let snapshot = registry.snapshot();
    debug!(
        unit = %path.display(),
        cases = snapshot.cases.len(),
        has_only = snapshot.has_only,
        "test unit loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct CountingLoader;

    impl UnitLoader for CountingLoader {
        fn evaluate(&self, path: &Path, registry: &mut TestRegistry) -> Result<(), LoadError> {
            if path.ends_with("broken") {
                return Err(LoadError::Eval {
                    path: path.to_path_buf(),
                    message: "boom".to_string(),
                });
            }
            registry.test("one", || Ok(()));
            registry.test_only("two", || Ok(()));
            Ok(())
        }
    }

    #[test]
    fn test_registry_reset_between_units() {
        let mut registry = TestRegistry::new();
        let first = load_unit(&CountingLoader, Path::new("a"), &mut registry).unwrap();
        let second = load_unit(&CountingLoader, Path::new("b"), &mut registry).unwrap();

        assert_eq!(first.cases.len(), 2);
        assert_eq!(second.cases.len(), 2);
        assert!(second.has_only);
    }

    #[test]
    fn test_load_error_propagates() {
        let mut registry = TestRegistry::new();
        registry.test("left over", || Ok(()));

        let err = load_unit(&CountingLoader, Path::new("broken"), &mut registry).unwrap_err();
        assert_eq!(err.path(), &PathBuf::from("broken"));
        assert!(registry.is_empty());
    }
}
