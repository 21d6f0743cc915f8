//! Selection of runnable cases (skip / only)

use crate::registry::TestCase;

/// Cases to execute plus the number left out
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub runnable: Vec<TestCase>,
    pub skipped: usize,
}

/// Pick the runnable cases of a unit, keeping registration order
///
/// When the unit registered any `only` case, exactly the `only` cases run and
/// every other case counts as skipped; a case's own `skip` flag is not consulted
/// in that mode. Otherwise every case not marked `skip` runs.
pub fn select(cases: &[TestCase], has_only: bool) -> Selection {
    let (runnable, left_out): (Vec<&TestCase>, Vec<&TestCase>) = if has_only {
        cases.iter().partition(|case| case.only())
    } else {
        cases.iter().partition(|case| !case.skip())
    };

    Selection {
        runnable: runnable.into_iter().cloned().collect(),
        skipped: left_out.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{TestOptions, TestRegistry};

    fn names(selection: &Selection) -> Vec<&str> {
        selection.runnable.iter().map(TestCase::name).collect()
    }

    #[test]
    fn test_skip_without_only() {
        let mut registry = TestRegistry::new();
        registry.test("a", || Ok(()));
        registry.test_skip("b", || Ok(()));
        registry.test("c", || Ok(()));
        let snapshot = registry.snapshot();

        let selection = select(&snapshot.cases, snapshot.has_only);
        assert_eq!(names(&selection), vec!["a", "c"]);
        assert_eq!(selection.skipped, 1);
    }

    #[test]
    fn test_only_wins_over_skip() {
        let mut registry = TestRegistry::new();
        registry.test("a", || Ok(()));
        registry.register(
            "both",
            || Ok(()),
            TestOptions {
                skip: true,
                only: true,
            },
        );
        registry.test_skip("c", || Ok(()));
        let snapshot = registry.snapshot();

        let selection = select(&snapshot.cases, snapshot.has_only);
        assert_eq!(names(&selection), vec!["both"]);
        assert_eq!(selection.skipped, 2);
    }

    #[test]
    fn test_empty_unit() {
        let selection = select(&[], false);
        assert!(selection.runnable.is_empty());
        assert_eq!(selection.skipped, 0);
    }
}
