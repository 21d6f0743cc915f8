//! Test registry: the cases registered by the unit currently being loaded

use crate::error::CaseError;
use std::fmt;
use std::rc::Rc;

/// Zero-argument test body
pub type TestAction = Rc<dyn Fn() -> Result<(), CaseError>>;

/// Flags attached to a registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestOptions {
    pub skip: bool,
    pub only: bool,
}

impl TestOptions {
    pub fn skip() -> Self {
        Self {
            skip: true,
            only: false,
        }
    }

    pub fn only() -> Self {
        Self {
            skip: false,
            only: true,
        }
    }
}

/// A registered test case
#[derive(Clone)]
pub struct TestCase {
    name: String,
    action: TestAction,
    options: TestOptions,
}

impl TestCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skip(&self) -> bool {
        self.options.skip
    }

    pub fn only(&self) -> bool {
        self.options.only
    }

    /// Invoke the test body
    pub fn run(&self) -> Result<(), CaseError> {
        (self.action)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("skip", &self.options.skip)
            .field("only", &self.options.only)
            .finish_non_exhaustive()
    }
}

/// Copy of the registry taken right after a unit finished loading
#[derive(Debug, Clone, Default)]
pub struct TestSnapshot {
    pub cases: Vec<TestCase>,
    pub has_only: bool,
}

/// Registration context for one unit load
///
/// A suite run owns a single registry and resets it before every unit, so
/// cases never leak from one unit into the next.
#[derive(Debug, Default)]
pub struct TestRegistry {
    cases: Vec<TestCase>,
    has_only: bool,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case; an `only` registration marks the whole unit
    pub fn register<F>(&mut self, name: impl Into<String>, action: F, options: TestOptions)
    where
        F: Fn() -> Result<(), CaseError> + 'static,
    {
        self.register_action(name, Rc::new(action), options);
    }

    pub fn register_action(
        &mut self,
        name: impl Into<String>,
        action: TestAction,
        options: TestOptions,
    ) {
        if options.only {
            self.has_only = true;
        }
        self.cases.push(TestCase {
            name: name.into(),
            action,
            options,
        });
    }

    pub fn test<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> Result<(), CaseError> + 'static,
    {
        self.register(name, action, TestOptions::default());
    }

    pub fn test_skip<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> Result<(), CaseError> + 'static,
    {
        self.register(name, action, TestOptions::skip());
    }

    pub fn test_only<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> Result<(), CaseError> + 'static,
    {
        self.register(name, action, TestOptions::only());
    }

    /// Copy of the current cases; later registrations are not visible in it
    pub fn snapshot(&self) -> TestSnapshot {
        TestSnapshot {
            cases: self.cases.clone(),
            has_only: self.has_only,
        }
    }

    pub fn reset(&mut self) {
        self.cases.clear();
        self.has_only = false;
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass() -> Result<(), CaseError> {
        Ok(())
    }

    #[test]
    fn test_only_sets_flag() {
        let mut registry = TestRegistry::new();
        registry.test("a", pass);
        assert!(!registry.snapshot().has_only);
        registry.test_only("b", pass);
        assert!(registry.snapshot().has_only);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut registry = TestRegistry::new();
        registry.test("a", pass);
        let snapshot = registry.snapshot();
        registry.test_only("b", pass);

        assert_eq!(snapshot.cases.len(), 1);
        assert!(!snapshot.has_only);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut registry = TestRegistry::new();
        registry.test_only("a", pass);
        registry.test_skip("b", pass);
        registry.reset();

        let snapshot = registry.snapshot();
        assert!(snapshot.cases.is_empty());
        assert!(!snapshot.has_only);
    }

    #[test]
    fn test_case_runs_action() {
        let mut registry = TestRegistry::new();
        registry.test("fails", || Err(CaseError::new("boom")));
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.cases[0].run(), Err(CaseError::new("boom")));
    }
}
