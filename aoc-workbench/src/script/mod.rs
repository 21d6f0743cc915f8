//! Rhai script host for solution and test units
//!
//! Every load builds a fresh [`Engine`] and recompiles the unit from disk, so a
//! unit never outlives the run that loaded it and edits are always seen.
//!
//! Functions available to every unit:
//! - `read_input(day)` / `read_input(day, name)`
//! - `assert_eq`, `assert_ne`, `assert_true`, `assert_throws`
//!
//! Test units additionally register cases with `test`, `test_skip` and `test_only`.

mod assert;
mod solution_unit;
mod test_unit;

pub use solution_unit::ScriptSolution;
pub use test_unit::ScriptTestLoader;

use crate::day::Day;
use crate::error::LoadError;
use crate::input::{DEFAULT_INPUT, InputSource};
use crate::layout::{ProjectLayout, UNIT_EXTENSION};
use rhai::module_resolvers::FileModuleResolver;
use rhai::{AST, Engine, EvalAltResult, ImmutableString};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Builds engines and compiles units for one puzzle project
#[derive(Clone)]
pub struct ScriptHost {
    layout: ProjectLayout,
    inputs: Arc<dyn InputSource>,
}

impl ScriptHost {
    pub fn new(layout: ProjectLayout, inputs: Arc<dyn InputSource>) -> Self {
        Self { layout, inputs }
    }

    /// A new engine with module imports rooted at the project root
    pub fn engine(&self) -> Engine {
        let mut engine = Engine::new();

        let mut resolver = FileModuleResolver::new_with_path_and_extension(
            self.layout.root(),
            UNIT_EXTENSION,
        );
        resolver.enable_cache(false);
        engine.set_module_resolver(resolver);

        assert::register(&mut engine);
        self.register_input(&mut engine);
        engine
    }

    fn register_input(&self, engine: &mut Engine) {
        let inputs = Arc::clone(&self.inputs);
        engine.register_fn(
            "read_input",
            move |day: i64| -> Result<String, Box<EvalAltResult>> {
                let day = Day::try_from(day).map_err(script_error)?;
                inputs.read(day, DEFAULT_INPUT).map_err(script_error)
            },
        );

        let inputs = Arc::clone(&self.inputs);
        engine.register_fn(
            "read_input",
            move |day: i64, name: ImmutableString| -> Result<String, Box<EvalAltResult>> {
                let day = Day::try_from(day).map_err(script_error)?;
                inputs.read(day, name.as_str()).map_err(script_error)
            },
        );
    }

    /// Read and compile a unit from disk
    pub fn compile(&self, engine: &Engine, path: &Path) -> Result<AST, LoadError> {
        let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        engine.compile(&source).map_err(|err| LoadError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// Convert any displayable error into a script runtime error
pub(crate) fn script_error(err: impl Display) -> Box<EvalAltResult> {
    err.to_string().into()
}
